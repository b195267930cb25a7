//! Learn command: recycling tips and short articles

use anyhow::{Result, bail};

use ecotrack::{RECYCLING_INFO, articles_about, topics};

pub fn learn_command(topic: Option<&str>) -> Result<()> {
    if topic.is_none() {
        println!("Recycling tips\n");
        for card in RECYCLING_INFO {
            println!("  {} {}", card.icon, card.title);
            println!("    {}\n", card.body);
        }
    }

    let articles: Vec<_> = articles_about(topic).collect();
    if articles.is_empty() {
        let known: Vec<&str> = topics().collect();
        bail!("Unknown topic: {} (try one of: {})", topic.unwrap_or(""), known.join(", "));
    }

    println!("Articles\n");
    for article in articles {
        println!("  [{}] {}", article.topic, article.title);
        println!("    {}\n", article.body);
    }
    Ok(())
}
