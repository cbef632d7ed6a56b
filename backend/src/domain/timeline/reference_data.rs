//! Built-in fetal development reference table.
//!
//! Used to seed the database on first start and as a fallback when the stored
//! table is empty. Lengths are crown-to-rump up to week 20 and crown-to-heel after.

use super::development::DevelopmentTable;
use shared::DevelopmentRecord;

// (week, size comparison, length cm, weight g, milestones)
const BUILTIN_WEEKS: &[(u32, &str, f64, f64, &[&str])] = &[
    (4, "Poppy seed", 0.1, 0.0, &["The embryo implants in the uterine lining"]),
    (5, "Sesame seed", 0.2, 0.0, &["The neural tube begins to form", "The heart starts to develop"]),
    (6, "Lentil", 0.5, 0.0, &["A heartbeat may be visible on ultrasound"]),
    (7, "Blueberry", 1.0, 0.0, &["Arm and leg buds appear"]),
    (8, "Raspberry", 1.6, 1.0, &["Fingers and toes start to form"]),
    (9, "Cherry", 2.3, 2.0, &["Essential organs have begun to form"]),
    (10, "Strawberry", 3.1, 4.0, &["The embryonic period ends; the baby is now a fetus"]),
    (11, "Lime", 4.1, 7.0, &["Tooth buds appear"]),
    (12, "Plum", 5.4, 14.0, &["Reflexes develop", "Fingernails begin to grow"]),
    (13, "Lemon", 7.4, 23.0, &["Vocal cords form"]),
    (14, "Nectarine", 8.7, 43.0, &["The baby can squint and frown"]),
    (15, "Apple", 10.1, 70.0, &["Bones start to harden"]),
    (16, "Avocado", 11.6, 100.0, &["The eyes can sense light"]),
    (17, "Pear", 13.0, 140.0, &["Fat stores begin to develop"]),
    (18, "Bell pepper", 14.2, 190.0, &["The ears move into position"]),
    (19, "Mango", 15.3, 240.0, &["A protective coating called vernix forms"]),
    (20, "Banana", 25.6, 300.0, &["Halfway there", "Movements are often felt now"]),
    (21, "Carrot", 26.7, 360.0, &["The baby can swallow"]),
    (22, "Papaya", 27.8, 430.0, &["Eyebrows and eyelids are visible"]),
    (23, "Grapefruit", 28.9, 501.0, &["Hearing develops further"]),
    (24, "Cantaloupe", 30.0, 600.0, &["The lungs develop branches"]),
    (25, "Cauliflower", 34.6, 660.0, &["The baby responds to familiar voices"]),
    (26, "Lettuce", 35.6, 760.0, &["The eyes begin to open"]),
    (27, "Cabbage", 36.6, 875.0, &["Sleep and wake cycles become regular"]),
    (28, "Eggplant", 37.6, 1005.0, &["The baby can blink"]),
    (29, "Butternut squash", 38.6, 1153.0, &["Muscles and lungs keep maturing"]),
    (30, "Cucumber", 39.9, 1319.0, &["The brain grows rapidly"]),
    (31, "Pineapple", 41.1, 1502.0, &["All five senses are working"]),
    (32, "Squash", 42.4, 1702.0, &["Toenails are visible"]),
    (33, "Durian", 43.7, 1918.0, &["The skull bones remain soft for birth"]),
    (34, "Melon", 45.0, 2146.0, &["The central nervous system is maturing"]),
    (35, "Honeydew", 46.2, 2383.0, &["The kidneys are fully developed"]),
    (36, "Papaya", 47.4, 2622.0, &["The baby may move head-down"]),
    (37, "Romaine lettuce", 48.6, 2859.0, &["The baby is considered early term"]),
    (38, "Pumpkin", 49.8, 3083.0, &["Organs are ready for life outside the womb"]),
    (39, "Watermelon", 50.7, 3288.0, &["The baby is considered full term"]),
    (40, "Small watermelon", 51.2, 3462.0, &["Due date week"]),
];

fn image_name(size_comparison: &str) -> String {
    format!("{}.png", size_comparison.to_lowercase().replace(' ', "_"))
}

/// The built-in table, weeks 4 through 40
pub fn builtin_records() -> Vec<DevelopmentRecord> {
    BUILTIN_WEEKS
        .iter()
        .map(|(week, size, length_cm, weight_g, milestones)| DevelopmentRecord {
            week: *week,
            size_comparison: size.to_string(),
            length_cm: *length_cm,
            weight_g: *weight_g,
            image: image_name(size),
            milestones: milestones.iter().map(|m| m.to_string()).collect(),
        })
        .collect()
}

pub fn builtin_table() -> DevelopmentTable {
    builtin_records()
        .into_iter()
        .map(|record| (record.week, record))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_table_covers_weeks_four_to_forty() {
        let table = builtin_table();
        assert_eq!(table.len(), 37);
        assert_eq!(table.keys().next(), Some(&4));
        assert_eq!(table.keys().last(), Some(&40));
        for week in 4..=40 {
            assert!(table.contains_key(&week), "missing week {}", week);
        }
    }

    #[test]
    fn test_builtin_records_are_complete() {
        for record in builtin_records() {
            assert!(!record.size_comparison.is_empty());
            assert!(!record.milestones.is_empty());
            assert!(record.image.ends_with(".png"));
        }
    }

    #[test]
    fn test_image_name() {
        assert_eq!(image_name("Bell pepper"), "bell_pepper.png");
    }
}
