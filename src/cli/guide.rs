//! Segregation guide command

use anyhow::{Result, bail};

use ecotrack::{Category, GuideItem, guide_for, lookup};

pub fn guide_command(category: Option<&str>, item: Option<&str>) -> Result<()> {
    if let Some(item) = item {
        match lookup(item) {
            Some(entry) => print_item(entry),
            None => println!("No guide entry for \"{}\".", item),
        }
        return Ok(());
    }

    let category = match category {
        Some(raw) => match Category::from_str(raw) {
            Some(c) => Some(c),
            None => bail!("Unknown category: {}", raw),
        },
        None => None,
    };

    let mut current = None;
    for entry in guide_for(category) {
        if current != Some(entry.category) {
            println!("\n{}", entry.category.label());
            current = Some(entry.category);
        }
        print_item(entry);
    }
    Ok(())
}

fn print_item(entry: &GuideItem) {
    println!("  {:<18} {:<22} {}", entry.item, entry.disposal, entry.tip);
}
