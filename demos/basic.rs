use sovran_any::{AnyBox, AnyError};

fn main() -> Result<(), AnyError> {
    env_logger::init();

    // Store an integer and read it back
    let a = AnyBox::new(5i32);
    println!("a holds {}: {}", a.type_info(), a.get::<i32>()?);

    // Asking for the wrong type is an error, not a panic
    match a.get::<String>() {
        Ok(text) => println!("This shouldn't happen - got {}", text),
        Err(e) => println!("Correctly rejected: {}", e),
    }

    let mut b = AnyBox::new(1.5f64);
    println!("b holds {}: {}", b.type_info(), b.get::<f64>()?);

    // Reassign with a value of a different type
    b.set(String::from("working"));
    println!("b holds {}: {}", b.type_info(), b.get::<String>()?);

    if let Err(e) = b.get::<f64>() {
        println!("The old f64 is gone: {}", e);
    }

    // Copy-assign from `a`
    b.clone_from(&a);
    println!("b copied from a: {}", b.get::<i32>()?);

    // The copy is independent of its source
    *b.get_mut::<i32>()? += 1;
    println!("a = {}, b = {}", a.get::<i32>()?, b.get::<i32>()?);

    // Move the value out of `b`; `b` is left empty
    let c = b.take();
    println!(
        "c = {}, b has value: {} ({})",
        c.get::<i32>()?,
        b.has_value(),
        b.type_info()
    );

    Ok(())
}
