pub mod annotation;
pub mod corpus;
pub mod html;
pub mod inventory;
pub mod poem;
pub mod reader;
pub mod segmentation;
pub mod tokenizer;
pub mod utility;
