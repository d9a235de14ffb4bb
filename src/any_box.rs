use crate::cell::{ErasedCell, Holder};
use crate::error::{AnyError, Result};
use crate::type_info::TypeInfo;
use std::any::{Any, TypeId};
use std::fmt;

/// A container for a single value of any type, recovered later with a runtime check
///
/// `AnyBox` owns zero or one value. The concrete type is erased when the value
/// goes in and is checked against the requested type whenever it comes out; a
/// mismatch (or an empty box) yields [`AnyError::TypeMismatch`] and leaves the
/// box exactly as it was.
///
/// Cloning an `AnyBox` deep-copies the stored value, which is why stored types
/// must implement [`Clone`].
///
/// # Examples
///
/// ```
/// use sovran_any::{AnyBox, AnyError};
///
/// let mut value = AnyBox::new(5i32);
/// assert_eq!(*value.get::<i32>()?, 5);
///
/// value.set(1.5f64);
/// assert_eq!(*value.get::<f64>()?, 1.5);
/// assert!(matches!(value.get::<i32>(), Err(AnyError::TypeMismatch { .. })));
/// # Ok::<(), AnyError>(())
/// ```
#[derive(Default)]
pub struct AnyBox {
    cell: Option<Box<dyn ErasedCell>>,
}

impl AnyBox {
    /// Creates a box holding `value`
    ///
    /// Passing another `AnyBox` nests it rather than copying it; use
    /// [`Clone::clone`] or [`AnyBox::take`] to copy or move a box.
    pub fn new<T: Any + Clone>(value: T) -> Self {
        Self {
            cell: Some(Holder::boxed(value)),
        }
    }

    /// Creates a box holding nothing
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_any::{AnyBox, TypeInfo};
    ///
    /// let empty = AnyBox::new_empty();
    /// assert!(!empty.has_value());
    /// assert_eq!(empty.type_info(), TypeInfo::none());
    /// assert!(empty.get::<i32>().is_err());
    /// ```
    pub fn new_empty() -> Self {
        Self { cell: None }
    }

    /// Stores `value`, dropping whatever was held before
    ///
    /// The new value is boxed before the old one is released, so the old
    /// contents are only gone once the new ones are in place.
    pub fn set<T: Any + Clone>(&mut self, value: T) {
        let cell = Holder::boxed(value);
        self.install(Some(cell));
    }

    /// Stores `value` and returns the previous contents as their own box
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_any::AnyBox;
    ///
    /// let mut value = AnyBox::new("first".to_string());
    /// let previous = value.replace(2u8);
    ///
    /// assert_eq!(previous.get::<String>().unwrap(), "first");
    /// assert_eq!(*value.get::<u8>().unwrap(), 2);
    /// ```
    pub fn replace<T: Any + Clone>(&mut self, value: T) -> AnyBox {
        let cell = Holder::boxed(value);
        AnyBox {
            cell: self.cell.replace(cell),
        }
    }

    /// Makes this box an independent copy of `other`
    ///
    /// Equivalent to [`Clone::clone_from`]. The copy of `other` is made before
    /// the current contents are dropped, so a panicking `Clone` leaves this box
    /// untouched. Assigning a box to itself cannot be expressed through
    /// `&mut self` and `&other`; `value = value.clone()` is the spelling for
    /// that and leaves the contents unchanged.
    pub fn assign(&mut self, other: &AnyBox) {
        let cell = other.cell.as_ref().map(|cell| cell.clone_cell());
        self.install(cell);
    }

    /// Moves the contents out into a new box, leaving this one empty
    ///
    /// No value is copied; only the owning pointer changes hands.
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_any::AnyBox;
    ///
    /// let mut source = AnyBox::new(vec![1, 2, 3]);
    /// let target = source.take();
    ///
    /// assert!(!source.has_value());
    /// assert_eq!(target.get::<Vec<i32>>().unwrap(), &vec![1, 2, 3]);
    /// ```
    pub fn take(&mut self) -> AnyBox {
        AnyBox {
            cell: self.cell.take(),
        }
    }

    /// Returns a reference to the stored value if it is a `T`
    ///
    /// The stored type must be exactly `T`: no numeric widening, no
    /// `String`/`&str` interchange, no trait-object matching.
    ///
    /// # Errors
    ///
    /// Returns `AnyError::TypeMismatch` if the box is empty or holds another type.
    pub fn get<T: Any>(&self) -> Result<&T> {
        let held = self.type_info();
        self.downcast_ref::<T>().ok_or_else(|| mismatch::<T>(held))
    }

    /// Returns a mutable reference to the stored value if it is a `T`
    ///
    /// # Errors
    ///
    /// Returns `AnyError::TypeMismatch` if the box is empty or holds another type.
    pub fn get_mut<T: Any>(&mut self) -> Result<&mut T> {
        let held = self.type_info();
        self.downcast_mut::<T>().ok_or_else(|| mismatch::<T>(held))
    }

    /// Like [`AnyBox::get`], but returns `None` instead of an error
    ///
    /// A miss here is an ordinary answer, so nothing is logged for it.
    pub fn downcast_ref<T: Any>(&self) -> Option<&T> {
        match self.cell.as_deref() {
            Some(cell) if cell.type_info() == TypeInfo::of::<T>() => {
                cell.as_any().downcast_ref::<T>()
            }
            _ => None,
        }
    }

    /// Like [`AnyBox::get_mut`], but returns `None` instead of an error
    pub fn downcast_mut<T: Any>(&mut self) -> Option<&mut T> {
        match self.cell.as_deref_mut() {
            Some(cell) if cell.type_info() == TypeInfo::of::<T>() => {
                cell.as_any_mut().downcast_mut::<T>()
            }
            _ => None,
        }
    }

    /// Runs a closure with read access to the stored `T`
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_any::{AnyBox, AnyError};
    ///
    /// let names = AnyBox::new(vec!["alice".to_string(), "bob".to_string()]);
    /// let count = names.with(|names: &Vec<String>| names.len())?;
    /// assert_eq!(count, 2);
    /// # Ok::<(), AnyError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `AnyError::TypeMismatch` if the box is empty or holds another type.
    /// The closure is not called in that case.
    pub fn with<T, F, R>(&self, f: F) -> Result<R>
    where
        T: Any,
        F: FnOnce(&T) -> R,
    {
        let value = self.get::<T>()?;
        Ok(f(value))
    }

    /// Runs a closure with write access to the stored `T`
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_any::{AnyBox, AnyError};
    /// use std::collections::HashMap;
    ///
    /// let mut counters = AnyBox::new(HashMap::<String, i32>::new());
    /// counters.with_mut(|counters: &mut HashMap<String, i32>| {
    ///     *counters.entry("visits".to_string()).or_insert(0) += 1;
    /// })?;
    ///
    /// let visits = counters.with(|counters: &HashMap<String, i32>| counters["visits"])?;
    /// assert_eq!(visits, 1);
    /// # Ok::<(), AnyError>(())
    /// ```
    ///
    /// # Errors
    ///
    /// Returns `AnyError::TypeMismatch` if the box is empty or holds another type.
    pub fn with_mut<T, F, R>(&mut self, f: F) -> Result<R>
    where
        T: Any,
        F: FnOnce(&mut T) -> R,
    {
        let value = self.get_mut::<T>()?;
        Ok(f(value))
    }

    /// Moves the stored `T` out, leaving the box empty
    ///
    /// # Errors
    ///
    /// Returns `AnyError::TypeMismatch` if the box is empty or holds another type.
    /// The box keeps its value in that case.
    pub fn take_value<T: Any>(&mut self) -> Result<T> {
        let held = self.type_info();
        if held != TypeInfo::of::<T>() {
            return Err(mismatch::<T>(held));
        }
        match self.cell.take().map(|cell| cell.into_any().downcast::<T>()) {
            Some(Ok(value)) => Ok(*value),
            _ => Err(mismatch::<T>(held)),
        }
    }

    /// Returns true if the box holds a `T`
    pub fn is<T: Any>(&self) -> bool {
        self.type_info() == TypeInfo::of::<T>()
    }

    /// Identity of the stored type, or [`TypeInfo::none`] when empty
    pub fn type_info(&self) -> TypeInfo {
        self.cell
            .as_ref()
            .map_or_else(TypeInfo::none, |cell| cell.type_info())
    }

    /// The stored value's [`TypeId`]; the empty token's id when empty
    pub fn type_id(&self) -> TypeId {
        self.type_info().id()
    }

    /// Name of the stored type, or `"none"` when empty
    pub fn type_name(&self) -> &'static str {
        self.type_info().name()
    }

    /// Returns true if the box holds a value
    pub fn has_value(&self) -> bool {
        self.cell.is_some()
    }

    /// Drops the stored value, if any. Calling this on an empty box does nothing.
    pub fn reset(&mut self) {
        if let Some(cell) = self.cell.take() {
            log::trace!("resetting cell holding {}", cell.type_info());
        }
    }

    fn install(&mut self, cell: Option<Box<dyn ErasedCell>>) {
        if let Some(old) = self.cell.as_ref() {
            log::trace!("dropping cell holding {}", old.type_info());
        }
        self.cell = cell;
    }
}

fn mismatch<T: Any>(held: TypeInfo) -> AnyError {
    let requested = std::any::type_name::<T>();
    log::debug!("rejected extraction of {} from box holding {}", requested, held);
    AnyError::TypeMismatch {
        requested,
        held: held.name(),
    }
}

impl Clone for AnyBox {
    fn clone(&self) -> Self {
        Self {
            cell: self.cell.as_ref().map(|cell| cell.clone_cell()),
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.assign(source);
    }
}

impl fmt::Debug for AnyBox {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AnyBox({})", self.type_name())
    }
}
