//! # Classifier
//!
//! The classifier engine: the owned counter state, the mutation
//! operations (`learn`, `unlearn`, `remove_category`), and inference
//! (`categorize`).

mod classifier_impl;
mod classifier_options;
mod inference;

#[doc(inline)]
pub use classifier_impl::*;
#[doc(inline)]
pub use classifier_options::*;
#[doc(inline)]
pub use inference::*;
