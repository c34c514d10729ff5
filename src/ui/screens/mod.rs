pub(crate) mod categories;
pub(crate) mod editor;
pub(crate) mod overview;
pub(crate) mod suggestion;
