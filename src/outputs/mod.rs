//! Report writers for analyzed articles.
//!
//! # Submodules
//!
//! - [`frequency`]: one `token,count` CSV per article
//! - [`summary`]: the append-only per-topic summary file
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── Debate/
//! │   ├── cnn-debate-takeaways.csv
//! │   ├── nytimes-presidential-debate.csv
//! │   └── summary.txt
//! └── Economy/
//!     ├── foxnews-jobs-report.csv
//!     └── summary.txt
//! ```

pub mod frequency;
pub mod summary;
