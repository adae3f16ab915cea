mod command;
mod query;

pub use self::command::{
    DynProductCommandService, MockProductCommandServiceTrait, ProductCommandServiceTrait,
};
pub use self::query::{
    DynProductQueryService, MockProductQueryServiceTrait, ProductQueryServiceTrait,
};
