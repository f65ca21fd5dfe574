// Articles: the document model and the loaders that produce input lists.

pub mod load;
pub mod models;
