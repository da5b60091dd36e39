//! Sample catalogue of board games loaded at startup.

use serde_json::{json, Value};

use crate::models::CreateProduct;

struct Game {
    name: &'static str,
    category: &'static str,
    description: &'static str,
    price: u32,
    stock: u32,
    rating: f64,
    image: &'static str,
}

const GAMES: &[Game] = &[
    Game {
        name: "Колонизаторы",
        category: "Стратегия",
        description: "Классическая стратегия на строительство поселений и торговлю ресурсами. 3-4 игрока.",
        price: 2990,
        stock: 15,
        rating: 4.8,
        image: "https://cf.geekdo-images.com/W3Bsga_uLP9kO91gZ7H8yw__imagepage/img/M_3Vg1j2HlNgkv7PL1xl1_-PkKA=/fit-in/900x600/filters:no_upscale():strip_icc()/pic2419375.jpg",
    },
    Game {
        name: "Каркассон",
        category: "Стратегия",
        description: "Игра на выкладывание тайлов и расстановку мипплов для захвата территорий.",
        price: 1890,
        stock: 22,
        rating: 4.6,
        image: "https://cf.geekdo-images.com/okM0dq_bEXnbyQTOvHfwRA__imagepage/img/H1oi5ek0kRjXapKvPkfpQmMqkqA=/fit-in/900x600/filters:no_upscale():strip_icc()/pic2337577.jpg",
    },
    Game {
        name: "Диксит",
        category: "Вечеринка",
        description: "Творческая игра с иллюстрациями, где нужно угадывать истории других игроков.",
        price: 2200,
        stock: 18,
        rating: 4.7,
        image: "https://cf.geekdo-images.com/lDe9QfMfOSXqXnmEFvNFAA__imagepage/img/8I2jXzAQSs6e3KBQPKZ3mj5x6tk=/fit-in/900x600/filters:no_upscale():strip_icc()/pic3738270.jpg",
    },
    Game {
        name: "Пандемия",
        category: "Кооператив",
        description: "Совместная игра: команда врачей останавливает распространение болезней по всему миру.",
        price: 2750,
        stock: 10,
        rating: 4.9,
        image: "https://cf.geekdo-images.com/S3ybV1LAp-8SnHIXLLjVqA__imagepage/img/2Kpf5TrgrMiALDHYdwKnHQgXS9w=/fit-in/900x600/filters:no_upscale():strip_icc()/pic1534148.jpg",
    },
    Game {
        name: "Ticket to Ride",
        category: "Семейная",
        description: "Прокладывайте железнодорожные маршруты по всей Европе. Легко учится, сложно мастерится.",
        price: 3400,
        stock: 8,
        rating: 4.8,
        image: "https://cf.geekdo-images.com/ZWJg0dCdrWHxVnc0eFXK8w__imagepage/img/hF1AZIaZlrfhWdRDIKsxVBQfwl0=/fit-in/900x600/filters:no_upscale():strip_icc()/pic38668.jpg",
    },
    Game {
        name: "Имаджинариум",
        category: "Вечеринка",
        description: "Русская версия Диксита с оригинальными иллюстрациями. Отлично подходит для компании.",
        price: 1650,
        stock: 30,
        rating: 4.4,
        image: "https://images.2game.ru/images/products/1/6748/66739447/imaginarium.jpg",
    },
    Game {
        name: "Betrayal at House on the Hill",
        category: "Хоррор",
        description: "Исследуйте жуткий особняк. В какой-то момент один из игроков становится предателем.",
        price: 3900,
        stock: 5,
        rating: 4.5,
        image: "https://cf.geekdo-images.com/oOmMnSfgcNWmqQjBFN_oXg__imagepage/img/0N4Ky1ZCi_MJFyinYMDfSyWqUys=/fit-in/900x600/filters:no_upscale():strip_icc()/pic828598.jpg",
    },
    Game {
        name: "Dominion",
        category: "Карточная",
        description: "Первая колодостроительная игра. Каждая партия уникальна благодаря разным наборам карт.",
        price: 2100,
        stock: 12,
        rating: 4.5,
        image: "https://cf.geekdo-images.com/j4ZDCJoHRSFfuE6_O7hTZA__imagepage/img/2T4flWC0P_4IWJpXIxAVKJSNGMc=/fit-in/900x600/filters:no_upscale():strip_icc()/pic394356.jpg",
    },
    Game {
        name: "7 Wonders",
        category: "Стратегия",
        description: "Стройте одно из 7 чудес света, одновременно развивая науку, армию и торговлю.",
        price: 3100,
        stock: 9,
        rating: 4.7,
        image: "https://cf.geekdo-images.com/RvFVTEpnbb4NM7k0IF8V7A__imagepage/img/F-Vf3ORTkHkEMWCy0GHQZ-mN3fk=/fit-in/900x600/filters:no_upscale():strip_icc()/pic860217.jpg",
    },
    Game {
        name: "Клуэдо",
        category: "Детектив",
        description: "Классическая детективная игра: выясните, кто убил мистера Боди, где и чем.",
        price: 1450,
        stock: 20,
        rating: 4.2,
        image: "https://cf.geekdo-images.com/PJosGEMEMfBunDMELh3bQA__imagepage/img/WzPnhBiHkQ3AJqBH0MaGMVsDTCE=/fit-in/900x600/filters:no_upscale():strip_icc()/pic1299166.jpg",
    },
];

fn text(s: &str) -> Option<Value> {
    Some(Value::String(s.to_string()))
}

/// Create payloads for the ten sample board games, in display order.
pub fn catalogue() -> Vec<CreateProduct> {
    GAMES
        .iter()
        .map(|game| CreateProduct {
            name: text(game.name),
            category: text(game.category),
            description: text(game.description),
            price: Some(json!(game.price)),
            stock: Some(json!(game.stock)),
            rating: Some(json!(game.rating)),
            image: text(game.image),
        })
        .collect()
}
