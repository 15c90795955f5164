use super::*;

fn slide(id: u32, title: &str) -> Slide {
    Slide {
        id,
        title: title.to_string(),
        description: String::new(),
        image: format!("/img/{id}.jpg"),
        category: None,
        client: None,
        year: None,
    }
}

#[test]
fn bundled_catalog_loads_in_order() {
    let cat = Catalog::bundled().unwrap();
    assert_eq!(cat.len(), 12);
    assert_eq!(cat.slides()[0].title, "Proyecto Madero");
    assert_eq!(cat.slides()[0].year, Some(2024));
    assert_eq!(cat.index_of(12), Some(11));
    assert_eq!(
        cat.find_by_slug("kleenex-innovacion").map(|s| s.id),
        Some(2)
    );
}

#[test]
fn collision_fails_fast() {
    let err = Catalog::new(vec![slide(1, "Café Uno"), slide(2, "cafe uno")]).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("content error:"));
    assert!(msg.contains("cafe-uno"));
}

#[test]
fn duplicate_ids_and_unslugable_titles_are_rejected() {
    assert!(Catalog::new(vec![slide(1, "A"), slide(1, "B")]).is_err());
    assert!(Catalog::new(vec![slide(1, "!!!")]).is_err());
}

#[test]
fn optional_fields_may_be_omitted() {
    let json = r#"[{ "id": 7, "title": "Solo", "description": "d", "image": "i.jpg" }]"#;
    let cat = Catalog::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cat.get(0).unwrap().category, None);
    let back = serde_json::to_string(cat.get(0).unwrap()).unwrap();
    assert!(!back.contains("category"));
}

#[test]
fn deserialize_runs_validation() {
    let json = r#"[
        { "id": 1, "title": "X", "description": "", "image": "" },
        { "id": 2, "title": "x", "description": "", "image": "" }
    ]"#;
    assert!(serde_json::from_str::<Catalog>(json).is_err());
}

#[test]
fn empty_catalog_is_allowed() {
    let cat = Catalog::from_reader("[]".as_bytes()).unwrap();
    assert!(cat.is_empty());
    assert!(cat.find_by_slug("").is_none());
}
