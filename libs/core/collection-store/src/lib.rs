//! Collection Store
//!
//! An ordered, in-memory collection of records sharing one schema. The store
//! assigns identifiers, validates payloads against a per-field rule set and
//! applies create / read / list / partial-update / delete operations.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐
//! │ CollectionStore  │  ← ordered Vec<R> behind one RwLock
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │   Record trait   │  ← schema: payload types, field order, build/patch
//! └────────┬─────────┘
//!          │
//! ┌────────▼─────────┐
//! │  field / rules   │  ← coercion, validator rules, violation report
//! └──────────────────┘
//! ```
//!
//! Payload types derive [`validator::Validate`] using the rule functions in
//! [`field`]; the store turns the resulting errors into an ordered
//! [`Violations`] report.
//!
//! # Usage
//!
//! ```rust,ignore
//! use collection_store::CollectionStore;
//!
//! let store = CollectionStore::<User>::new();
//! let user = store.create(input).await?;
//! assert_eq!(store.get(user.id()).await?.id(), user.id());
//! ```

pub mod error;
pub mod field;
pub mod id;
pub mod record;
pub mod store;
pub mod violation;

pub use error::{StoreError, StoreResult};
pub use id::ID_LENGTH;
pub use record::Record;
pub use store::CollectionStore;
pub use violation::{Violation, Violations};
