use std::any::{type_name, TypeId};
use std::fmt;
use std::hash::{Hash, Hasher};

/// Stand-in for "no value". Uninhabited, so nothing of this type can be stored.
enum Nothing {}

/// Identity token for the type held by an [`AnyBox`](crate::AnyBox)
///
/// Two tokens are equal if and only if they were produced for the same concrete
/// type. The type name is carried along for messages and `Debug` output, but it
/// plays no part in comparisons.
///
/// # Examples
///
/// ```
/// use sovran_any::{AnyBox, TypeInfo};
///
/// let value = AnyBox::new(5i32);
/// assert_eq!(value.type_info(), TypeInfo::of::<i32>());
/// assert_ne!(value.type_info(), TypeInfo::of::<i64>());
///
/// let empty = AnyBox::default();
/// assert_eq!(empty.type_info(), TypeInfo::none());
/// assert_eq!(empty.type_info().to_string(), "none");
/// ```
#[derive(Clone, Copy)]
pub struct TypeInfo {
    id: TypeId,
    name: &'static str,
}

impl TypeInfo {
    /// Returns the token for `T`
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            id: TypeId::of::<T>(),
            name: type_name::<T>(),
        }
    }

    /// Returns the token reported by an empty container
    pub fn none() -> Self {
        Self {
            id: TypeId::of::<Nothing>(),
            name: "none",
        }
    }

    pub fn id(&self) -> TypeId {
        self.id
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Returns true if this is the "no value" token
    pub fn is_none(&self) -> bool {
        self.id == TypeId::of::<Nothing>()
    }
}

impl PartialEq for TypeInfo {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TypeInfo {}

impl Hash for TypeInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl fmt::Debug for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeInfo({})", self.name)
    }
}

impl fmt::Display for TypeInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}
