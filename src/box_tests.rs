// src/box_tests.rs
#[cfg(test)]
mod tests {
    use crate::{AnyBox, AnyError, TypeInfo};
    use std::rc::Rc;

    // Define a test trait
    trait Animal {
        fn make_sound(&self) -> String;
    }

    // And some implementations
    #[derive(Debug, Clone, PartialEq)]
    struct Dog {
        name: String,
        breed: String,
    }

    impl Dog {
        fn wag_tail(&self) -> String {
            format!("{} wags tail happily!", self.name)
        }
    }

    impl Animal for Dog {
        fn make_sound(&self) -> String {
            format!("{} says: Woof!", self.name)
        }
    }

    #[derive(Debug, Clone, PartialEq)]
    struct Cat {
        name: String,
        lives: u8,
    }

    impl Cat {
        fn purr(&self) -> String {
            format!("{} purrs contentedly", self.name)
        }
    }

    impl Animal for Cat {
        fn make_sound(&self) -> String {
            format!("{} says: Meow!", self.name)
        }
    }

    fn rover() -> Dog {
        Dog {
            name: "Rover".to_string(),
            breed: "Golden Retriever".to_string(),
        }
    }

    fn whiskers() -> Cat {
        Cat {
            name: "Whiskers".to_string(),
            lives: 9,
        }
    }

    #[test]
    fn test_struct_storage_and_access() -> Result<(), AnyError> {
        let dog = AnyBox::new(rover());
        let cat = AnyBox::new(whiskers());

        dog.with(|dog: &Dog| {
            assert_eq!(dog.breed, "Golden Retriever");
            assert_eq!(dog.wag_tail(), "Rover wags tail happily!");
        })?;

        cat.with(|cat: &Cat| {
            assert_eq!(cat.lives, 9);
            assert_eq!(cat.purr(), "Whiskers purrs contentedly");
        })?;

        // Verify type safety
        assert!(dog.with(|_: &Cat| {}).is_err());
        assert!(cat.with(|_: &Dog| {}).is_err());

        Ok(())
    }

    #[test]
    fn test_mutable_access() -> Result<(), AnyError> {
        let mut cat = AnyBox::new(whiskers());

        cat.with_mut(|cat: &mut Cat| {
            cat.lives -= 1;
        })?;

        assert_eq!(cat.get::<Cat>()?.lives, 8);

        cat.get_mut::<Cat>()?.name = "Tom".to_string();
        assert_eq!(cat.get::<Cat>()?.make_sound(), "Tom says: Meow!");

        Ok(())
    }

    #[test]
    fn test_with_mut_mismatch_skips_closure() {
        let mut dog = AnyBox::new(rover());

        let result = dog.with_mut(|_: &mut Cat| {
            panic!("Should not reach here");
        });

        assert!(matches!(result, Err(AnyError::TypeMismatch { .. })));
        assert_eq!(dog.get::<Dog>().unwrap(), &rover());
    }

    #[test]
    fn test_no_trait_object_matching() {
        // A Dog is stored; asking for the trait object it implements must fail
        let dog = AnyBox::new(rover());
        assert!(dog.get::<Rc<dyn Animal>>().is_err());

        // Storing the trait object is a different type altogether
        let animal: Rc<dyn Animal> = Rc::new(rover());
        let boxed = AnyBox::new(animal);
        assert!(boxed.get::<Dog>().is_err());
        assert_eq!(
            boxed.get::<Rc<dyn Animal>>().unwrap().make_sound(),
            "Rover says: Woof!"
        );
        assert_eq!(boxed.type_info(), TypeInfo::of::<Rc<dyn Animal>>());
    }

    #[test]
    fn test_no_numeric_or_reference_conversions() {
        let number = AnyBox::new(5i32);
        assert!(number.get::<i64>().is_err());
        assert!(number.get::<u32>().is_err());
        assert!(number.get::<f64>().is_err());
        assert!(number.get::<&i32>().is_err());

        let text = AnyBox::new("literal");
        assert!(text.get::<String>().is_err());
        assert_eq!(*text.get::<&str>().unwrap(), "literal");
    }

    #[test]
    fn test_copy_clones_value() {
        let shared = Rc::new(5);
        let original = AnyBox::new(Rc::clone(&shared));
        let copy = original.clone();

        // Rc's Clone bumps the count, so the copy owns its own handle
        assert_eq!(Rc::strong_count(&shared), 3);
        drop(copy);
        assert_eq!(Rc::strong_count(&shared), 2);
        drop(original);
        assert_eq!(Rc::strong_count(&shared), 1);
    }

    #[test]
    fn test_reassignment_drops_previous_value() {
        let tracked = Rc::new(());
        let mut value = AnyBox::new(Rc::clone(&tracked));
        assert_eq!(Rc::strong_count(&tracked), 2);

        value.set(whiskers());
        assert_eq!(Rc::strong_count(&tracked), 1);
        assert!(value.get::<Rc<()>>().is_err());
        assert_eq!(value.get::<Cat>().unwrap(), &whiskers());
    }

    #[test]
    fn test_assign_from_empty_empties_target() {
        let tracked = Rc::new(());
        let mut value = AnyBox::new(Rc::clone(&tracked));
        value.assign(&AnyBox::new_empty());

        assert!(!value.has_value());
        assert!(value.type_info().is_none());
        assert_eq!(Rc::strong_count(&tracked), 1);
    }

    #[test]
    fn test_assign_over_occupied_drops_previous_value() {
        let tracked = Rc::new(());
        let mut value = AnyBox::new(Rc::clone(&tracked));

        value.assign(&AnyBox::new(1u8));
        assert_eq!(Rc::strong_count(&tracked), 1);
        assert_eq!(*value.get::<u8>().unwrap(), 1);

        let mut again = AnyBox::new(Rc::clone(&tracked));
        again.clone_from(&AnyBox::new(rover()));
        assert_eq!(Rc::strong_count(&tracked), 1);
        assert_eq!(again.get::<Dog>().unwrap(), &rover());
    }

    #[test]
    fn test_reset_drops_value() {
        let tracked = Rc::new(());
        let mut value = AnyBox::new(Rc::clone(&tracked));
        assert_eq!(Rc::strong_count(&tracked), 2);

        value.reset();
        assert_eq!(Rc::strong_count(&tracked), 1);

        value.reset();
        assert_eq!(Rc::strong_count(&tracked), 1);
        assert!(!value.has_value());
    }

    #[test]
    fn test_nested_box_is_a_value() -> Result<(), AnyError> {
        let inner = AnyBox::new(rover());
        let outer = AnyBox::new(inner);

        assert!(outer.get::<Dog>().is_err());
        assert_eq!(outer.get::<AnyBox>()?.get::<Dog>()?, &rover());

        Ok(())
    }
}
