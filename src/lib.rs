//! # sovran-any
//!
//! A type-erased container for a single value of any type.
//!
//! `sovran-any` provides [`AnyBox`], a handle that can hold a value of any
//! `'static + Clone` type and hand it back later, checked at runtime against the
//! type you ask for. Asking for the wrong type never panics and never converts:
//! it returns [`AnyError::TypeMismatch`] and leaves the box as it was.
//!
//! ## Key Features
//!
//! - **Checked extraction**: values come back only as the exact type stored
//! - **Value semantics**: cloning a box deep-copies its value; moving it out with
//!   [`AnyBox::take`] leaves the source empty
//! - **Strong guarantee**: assignment builds the new contents before releasing the old
//! - **Identity tokens**: [`TypeInfo`] compares stored types and names them in errors
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use sovran_any::{AnyBox, AnyError};
//!
//! fn main() -> Result<(), AnyError> {
//!     let a = AnyBox::new(5i32);
//!     println!("{}", a.get::<i32>()?);
//!
//!     let mut b = AnyBox::new(1.5f64);
//!     println!("{}", b.get::<f64>()?);
//!
//!     b.set(String::from("working"));
//!     println!("{}", b.get::<String>()?);
//!
//!     // Copy-assign from `a`; both stay usable
//!     b.clone_from(&a);
//!     println!("{} {}", b.get::<i32>()?, a.get::<i32>()?);
//!
//!     Ok(())
//! }
//! ```
//!
//! ### Error Handling
//!
//! ```rust
//! use sovran_any::{AnyBox, AnyError};
//!
//! let value = AnyBox::new(vec!["setting1", "setting2"]);
//!
//! match value.get::<String>() {
//!     Ok(text) => println!("Config: {}", text),
//!     Err(AnyError::TypeMismatch { requested, held }) => {
//!         println!("Wanted {}, but the box holds {}", requested, held)
//!     }
//! }
//!
//! // The failed attempt didn't disturb the stored value
//! assert_eq!(value.get::<Vec<&str>>().unwrap().len(), 2);
//! ```
//!
//! ### Dispatching on Stored Type
//!
//! ```rust
//! use sovran_any::{AnyBox, TypeInfo};
//!
//! let values = vec![AnyBox::new(1u32), AnyBox::new("two"), AnyBox::default()];
//!
//! for value in &values {
//!     let info = value.type_info();
//!     if info == TypeInfo::of::<u32>() {
//!         println!("number: {}", value.get::<u32>().unwrap());
//!     } else if info.is_none() {
//!         println!("empty");
//!     } else {
//!         println!("something else: {}", info);
//!     }
//! }
//! ```

mod any_box;
mod cell;
mod error;
mod type_info;

#[cfg(test)]
mod box_tests;

pub use any_box::AnyBox;
pub use error::{AnyError, Result};
pub use type_info::TypeInfo;
