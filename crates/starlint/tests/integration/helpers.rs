pub mod binary;
pub mod commit;

pub use binary::*;
pub use command_ext::*;
pub use commit::*;
