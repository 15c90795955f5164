use super::*;

#[test]
fn slugify_examples() {
    assert_eq!(slugify("Proyecto Madero"), "proyecto-madero");
    assert_eq!(slugify(" Été-2024! "), "ete-2024");
    assert_eq!(slugify(""), "");
}

#[test]
fn slugify_strips_diacritics_and_collapses_runs() {
    assert_eq!(slugify("Kleenex Innovación"), "kleenex-innovacion");
    assert_eq!(slugify("Grupo Ordás Digital Strategy"), "grupo-ordas-digital-strategy");
    assert_eq!(slugify("Kimberly-Clark Sustentable"), "kimberly-clark-sustentable");
    assert_eq!(slugify("A -- B ?? C"), "a-b-c");
    assert_eq!(slugify("¡¿!!"), "");
    assert_eq!(slugify("Campaña 360°"), "campana-360");
}

#[test]
fn slugify_is_idempotent() {
    for s in ["Proyecto Madero", " Été-2024! ", "MIT Farma Campaign", "x"] {
        let once = slugify(s);
        assert_eq!(slugify(&once), once);
    }
}

#[test]
fn collisions_are_reported_with_positions() {
    let titles = ["Café Uno", "Otro", "cafe uno!"];
    assert_eq!(
        find_collision(titles),
        Some((0, 2, "cafe-uno".to_string()))
    );
    assert_eq!(find_collision(["a", "b"]), None);
}
