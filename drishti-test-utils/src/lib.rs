pub mod builder;
pub mod constant;
pub mod error;
pub mod factory;
pub mod source;

pub use builder::{TestBuilder, TestContext};
pub use error::TestError;
pub use source::FailingSource;

pub mod prelude {
    pub use crate::{factory, FailingSource, TestBuilder, TestContext, TestError};
}
