//! Static reading material: recycling tips per material and short articles

#[derive(Debug, Clone, Copy)]
pub struct InfoCard {
    pub title: &'static str,
    pub body: &'static str,
    pub icon: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Article {
    pub topic: &'static str,
    pub title: &'static str,
    pub body: &'static str,
}

pub static RECYCLING_INFO: &[InfoCard] = &[
    InfoCard {
        title: "Plastic Recycling",
        body: "Most plastic containers (bottles, jugs, tubs) can be recycled. Look for the \
               recycling symbol. Clean and dry items before recycling. Remove caps from bottles.",
        icon: "♻️",
    },
    InfoCard {
        title: "Paper Recycling",
        body: "Newspapers, magazines, office paper, and cardboard can all be recycled. Keep paper \
               dry and remove any plastic or metal components like staples.",
        icon: "📄",
    },
    InfoCard {
        title: "Glass Recycling",
        body: "Glass bottles and jars are 100% recyclable and can be recycled endlessly. Remove \
               labels and rinse clean. Broken glass should be wrapped and disposed safely.",
        icon: "🍶",
    },
    InfoCard {
        title: "Metal Recycling",
        body: "Aluminum cans, steel cans, and other metal items are highly recyclable. Rinse clean \
               before recycling. Metal can be recycled indefinitely without losing quality.",
        icon: "🥫",
    },
    InfoCard {
        title: "E-Waste Recycling",
        body: "Electronics contain valuable materials and should be recycled at designated e-waste \
               centers. Never throw electronics in regular trash as they contain hazardous materials.",
        icon: "💻",
    },
    InfoCard {
        title: "Composting",
        body: "Organic waste like food scraps and yard waste can be composted. Composting reduces \
               methane emissions and creates nutrient-rich soil. Start a compost bin at home!",
        icon: "🌱",
    },
];

pub static EDUCATIONAL_CONTENT: &[Article] = &[
    Article {
        topic: "Basics",
        title: "The 3 R's: Reduce, Reuse, Recycle",
        body: "The foundation of waste management. Reduce consumption, reuse items when possible, \
               and recycle materials that can be processed into new products. This hierarchy helps \
               minimize waste and environmental impact.",
    },
    Article {
        topic: "Segregation",
        title: "Why Waste Segregation Matters",
        body: "Proper waste segregation ensures that recyclable materials don't end up in \
               landfills. It also prevents contamination, making recycling more efficient and \
               cost-effective. Segregating at source is the first step to effective waste management.",
    },
    Article {
        topic: "Plastic",
        title: "The Impact of Plastic Waste",
        body: "Plastic waste takes hundreds of years to decompose and often ends up in oceans, \
               harming marine life. By reducing plastic use and recycling properly, we can \
               significantly reduce this environmental burden.",
    },
    Article {
        topic: "Composting",
        title: "Composting at Home",
        body: "Composting organic waste reduces methane emissions from landfills and creates \
               nutrient-rich soil. You can start a simple compost bin in your backyard or use a \
               kitchen composter for food scraps.",
    },
    Article {
        topic: "E-Waste",
        title: "E-Waste: A Growing Concern",
        body: "Electronic waste contains valuable materials like gold and silver, but also \
               hazardous substances. Proper e-waste recycling recovers valuable resources while \
               safely handling toxic materials.",
    },
    Article {
        topic: "Economy",
        title: "The Circular Economy",
        body: "A circular economy aims to eliminate waste by keeping materials in use. Products are \
               designed to be reused, repaired, or recycled, creating a sustainable loop that \
               reduces the need for new resources.",
    },
];

/// Articles whose topic matches `topic` case-insensitively, or all of them
pub fn articles_about(topic: Option<&str>) -> impl Iterator<Item = &'static Article> {
    let needle = topic.map(|t| t.trim().to_lowercase());
    EDUCATIONAL_CONTENT
        .iter()
        .filter(move |a| needle.as_deref().is_none_or(|n| a.topic.to_lowercase() == n))
}

/// Distinct article topics, in table order
pub fn topics() -> impl Iterator<Item = &'static str> {
    EDUCATIONAL_CONTENT.iter().map(|a| a.topic)
}
