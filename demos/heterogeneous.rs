use sovran_any::{AnyBox, AnyError, TypeInfo};
use std::collections::HashMap;

#[derive(Clone, Debug)]
struct Settings {
    name: String,
    retries: u32,
}

fn describe(value: &AnyBox) -> String {
    let info = value.type_info();
    if info.is_none() {
        "empty slot".to_string()
    } else if let Some(n) = value.downcast_ref::<i64>() {
        format!("integer {}", n)
    } else if let Some(text) = value.downcast_ref::<String>() {
        format!("text {:?}", text)
    } else if let Some(settings) = value.downcast_ref::<Settings>() {
        format!("settings for {} ({} retries)", settings.name, settings.retries)
    } else {
        format!("something of type {}", info)
    }
}

fn main() -> Result<(), AnyError> {
    env_logger::init();

    let mut slots = vec![
        AnyBox::new(42i64),
        AnyBox::new("hello".to_string()),
        AnyBox::new(Settings {
            name: "uploader".to_string(),
            retries: 3,
        }),
        AnyBox::new(HashMap::from([("visits".to_string(), 0u32)])),
        AnyBox::default(),
    ];

    for (index, slot) in slots.iter().enumerate() {
        println!("slot {}: {}", index, describe(slot));
    }

    // Update values in place, only where the type matches
    for slot in slots.iter_mut() {
        if slot.is::<Settings>() {
            slot.with_mut(|settings: &mut Settings| settings.retries += 1)?;
        }
        if slot.type_info() == TypeInfo::of::<HashMap<String, u32>>() {
            slot.with_mut(|counters: &mut HashMap<String, u32>| {
                *counters.entry("visits".to_string()).or_insert(0) += 1;
            })?;
        }
    }

    // A snapshot is a deep copy; later changes don't reach it
    let snapshot = slots.clone();
    slots[0].set(7i64);
    slots[4].set("filled".to_string());

    println!("after update:");
    for (index, (now, then)) in slots.iter().zip(snapshot.iter()).enumerate() {
        println!("slot {}: {} (was {})", index, describe(now), describe(then));
    }

    let visits = slots[3].with(|counters: &HashMap<String, u32>| counters["visits"])?;
    println!("visits: {}", visits);

    Ok(())
}
