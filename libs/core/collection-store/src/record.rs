use validator::Validate;

use crate::error::StoreResult;

/// Schema of a record kept in a [`CollectionStore`](crate::CollectionStore).
///
/// `Create` declares every required field as `required`; `Patch` carries the
/// same fields with no `required` rule so only present fields are checked.
pub trait Record: Clone + Send + Sync + 'static {
    /// Payload accepted by `create`
    type Create: Validate + Send;
    /// Payload accepted by `update`
    type Patch: Validate + Send;

    /// Record kind used in log lines and not-found messages, e.g. `"Product"`.
    const KIND: &'static str;

    /// Updatable field names in the order violations are reported.
    const FIELDS: &'static [&'static str];

    fn id(&self) -> &str;

    /// Build a record from a validated payload and a freshly generated id.
    fn from_create(id: String, input: Self::Create) -> StoreResult<Self>;

    /// Whether `patch` carries at least one updatable field.
    fn has_changes(patch: &Self::Patch) -> bool;

    /// Apply the present fields of a validated patch.
    fn apply_patch(&mut self, patch: Self::Patch) -> StoreResult<()>;
}
