//! Segregation guide: where common items go

use super::waste::Category;

#[derive(Debug, Clone, Copy)]
pub struct GuideItem {
    pub category: Category,
    pub item: &'static str,
    pub disposal: &'static str,
    pub tip: &'static str,
}

pub static GUIDE: &[GuideItem] = &[
    // === RECYCLABLE ===
    GuideItem {
        category: Category::Recyclable,
        item: "Plastic Bottles",
        disposal: "Recycle bin",
        tip: "Remove caps and rinse before recycling",
    },
    GuideItem {
        category: Category::Recyclable,
        item: "Paper",
        disposal: "Recycle bin",
        tip: "Keep dry and clean, remove staples",
    },
    GuideItem {
        category: Category::Recyclable,
        item: "Cardboard",
        disposal: "Recycle bin",
        tip: "Flatten boxes before recycling",
    },
    GuideItem {
        category: Category::Recyclable,
        item: "Glass Bottles",
        disposal: "Recycle bin",
        tip: "Remove labels and rinse clean",
    },
    GuideItem {
        category: Category::Recyclable,
        item: "Metal Cans",
        disposal: "Recycle bin",
        tip: "Rinse and remove labels",
    },
    GuideItem {
        category: Category::Recyclable,
        item: "Newspapers",
        disposal: "Recycle bin",
        tip: "Keep dry and bundle together",
    },
    // === ORGANIC ===
    GuideItem {
        category: Category::Organic,
        item: "Food Scraps",
        disposal: "Compost bin",
        tip: "Compost at home or use separate collection",
    },
    GuideItem {
        category: Category::Organic,
        item: "Coffee Grounds",
        disposal: "Compost bin",
        tip: "Rich in nitrogen",
    },
    GuideItem {
        category: Category::Organic,
        item: "Eggshells",
        disposal: "Compost bin",
        tip: "Crush before adding to compost",
    },
    GuideItem {
        category: Category::Organic,
        item: "Garden Waste",
        disposal: "Compost bin",
        tip: "Leaves and grass clippings compost well",
    },
    // === HAZARDOUS ===
    GuideItem {
        category: Category::Hazardous,
        item: "Batteries",
        disposal: "Hazardous waste facility",
        tip: "Never put in regular trash",
    },
    GuideItem {
        category: Category::Hazardous,
        item: "Electronics",
        disposal: "E-waste collection center",
        tip: "Contains recoverable metals",
    },
    GuideItem {
        category: Category::Hazardous,
        item: "Paint",
        disposal: "Hazardous waste facility",
        tip: "Check for local paint take-back programs",
    },
    GuideItem {
        category: Category::Hazardous,
        item: "Medications",
        disposal: "Pharmacy or hazardous waste facility",
        tip: "Never flush down the drain",
    },
    GuideItem {
        category: Category::Hazardous,
        item: "Fluorescent Bulbs",
        disposal: "Hazardous waste facility",
        tip: "Contains mercury",
    },
    // === GENERAL ===
    GuideItem {
        category: Category::General,
        item: "Plastic Bags",
        disposal: "General waste",
        tip: "Some stores accept them for recycling",
    },
    GuideItem {
        category: Category::General,
        item: "Styrofoam",
        disposal: "General waste",
        tip: "Rarely recyclable, reduce usage",
    },
    GuideItem {
        category: Category::General,
        item: "Chip Bags",
        disposal: "General waste",
        tip: "Multi-layer packaging",
    },
    GuideItem {
        category: Category::General,
        item: "Ceramics",
        disposal: "General waste",
        tip: "Not accepted by standard recycling",
    },
];

/// Guide entries for one category, or all of them
pub fn guide_for(category: Option<Category>) -> impl Iterator<Item = &'static GuideItem> {
    GUIDE
        .iter()
        .filter(move |g| category.is_none_or(|c| g.category == c))
}

/// Case-insensitive lookup of an item by name
pub fn lookup(item: &str) -> Option<&'static GuideItem> {
    let needle = item.trim().to_lowercase();
    GUIDE.iter().find(|g| g.item.to_lowercase() == needle)
}
