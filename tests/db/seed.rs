use std::io::Write;

use bistro_boss::seed::{SeedReport, seed};
use tempfile::NamedTempFile;

use crate::common::*;

fn json_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_seed_loads_menu_and_reviews() {
    let pool = test_pool();
    let conn = pool.get().unwrap();
    let menu = json_file(
        r#"[
            {"name": "Caesar", "category": "salad", "price": 12.0, "recipe": "Romaine, parmesan", "image": "caesar.jpg"},
            {"name": "Tomato Soup", "category": "soup", "price": 6.5}
        ]"#,
    );
    let reviews = json_file(r#"[{"name": "Jane", "details": "Lovely", "rating": 4.5}]"#);

    let report = seed(&conn, Some(menu.path()), Some(reviews.path())).unwrap();

    assert_eq!(
        report,
        SeedReport {
            menu_items: 2,
            reviews: 1
        }
    );
    let items = queries::list_menu_items(&conn).unwrap();
    assert_eq!(items[0].description, "Romaine, parmesan");
    assert_eq!(items[1].image, "");
    assert_eq!(queries::list_reviews(&conn).unwrap()[0].rating, 4.5);
}

#[test]
fn test_seed_rejects_invalid_json() {
    let pool = test_pool();
    let conn = pool.get().unwrap();
    let menu = json_file("{ not an array");

    let result = seed(&conn, Some(menu.path()), None);

    assert!(result.is_err());
    assert!(queries::list_menu_items(&conn).unwrap().is_empty());
}
