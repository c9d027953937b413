pub mod normalize;
pub mod prompt;
pub mod types;

pub use normalize::{normalize, normalize_titles, NormalizeOptions, DEFAULT_MIN_TITLE_LEN};
pub use prompt::{Prompt, PromptTemplate, TitleParams};
pub use types::{ErrorBody, TitleRequest, TitlesResponse};
