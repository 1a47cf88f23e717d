pub mod input;
pub mod markdown;
pub mod page;
pub mod result;
pub mod spinner;

pub use input::SearchInput;
pub use page::{render_page, PageView};
pub use result::ResultDisplay;
