use crate::type_info::TypeInfo;
use std::any::Any;

/// Storage for one value whose concrete type is hidden behind a vtable
///
/// The container only ever talks to a `Box<dyn ErasedCell>`. Everything that
/// needs the concrete type (identity, duplication, teardown) happens here.
pub(crate) trait ErasedCell {
    /// Identity of the stored type, stable for the life of the cell
    fn type_info(&self) -> TypeInfo;

    /// Deep copy into a new, independently owned cell of the same type
    fn clone_cell(&self) -> Box<dyn ErasedCell>;

    fn as_any(&self) -> &dyn Any;

    fn as_any_mut(&mut self) -> &mut dyn Any;

    /// Gives up the cell and hands back the bare value
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

/// The one implementation of [`ErasedCell`], instantiated once per stored type
pub(crate) struct Holder<T> {
    value: T,
}

impl<T: Any + Clone> Holder<T> {
    pub(crate) fn boxed(value: T) -> Box<dyn ErasedCell> {
        log::trace!("creating cell for {}", std::any::type_name::<T>());
        Box::new(Self { value })
    }
}

impl<T: Any + Clone> ErasedCell for Holder<T> {
    fn type_info(&self) -> TypeInfo {
        TypeInfo::of::<T>()
    }

    fn clone_cell(&self) -> Box<dyn ErasedCell> {
        log::trace!("duplicating cell for {}", std::any::type_name::<T>());
        Box::new(Self {
            value: self.value.clone(),
        })
    }

    fn as_any(&self) -> &dyn Any {
        &self.value
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        &mut self.value
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        Box::new(self.value)
    }
}
