use solid_atlas::{
    data, Atlas, CardState, Catalog, Discrepancy, Error, Glyph, Language, Mark, PatternName,
    PrincipleCode, RelationshipCell, Side,
};

fn atlas() -> Atlas {
    Atlas::load().unwrap()
}

#[test]
fn lookup_is_total_and_deterministic() {
    let atlas = atlas();
    for p in PrincipleCode::ALL {
        for t in data::COLUMNS {
            let first = atlas.lookup(p, t).unwrap();
            let second = atlas.lookup(p, t).unwrap();
            assert_eq!(first, second, "{} / {}", p, t);
        }
    }
}

#[test]
fn observer_note_comes_from_the_pattern_record() {
    let atlas = atlas();
    assert_eq!(
        atlas.lookup(PrincipleCode::SRP, PatternName::Observer),
        Ok(RelationshipCell::PresentWithNote(
            "Separates the observable object from the observers"
        ))
    );
    assert_eq!(
        atlas.lookup(PrincipleCode::SRP, PatternName::Factory),
        Ok(RelationshipCell::Absent)
    );
    assert_eq!(
        atlas.lookup_by_name("srp", "Observer"),
        atlas.lookup(PrincipleCode::SRP, PatternName::Observer)
    );
}

#[test]
fn facade_has_no_card_but_keeps_its_column() {
    let atlas = atlas();
    assert!(atlas.catalog().pattern(PatternName::Facade).is_none());
    assert_eq!(
        atlas.lookup(PrincipleCode::SRP, PatternName::Facade),
        Ok(RelationshipCell::PresentWithNote(
            "Uses a facade to hide complex subsystems, letting each component focus on a single responsibility."
        ))
    );
}

#[test]
fn lookup_outside_the_columns_fails() {
    let catalog = Catalog::shipped().unwrap();
    let columns = [PatternName::Factory, PatternName::Observer];
    let atlas = Atlas::from_parts(catalog, &data::matrix(), &columns).unwrap();
    assert_eq!(
        atlas.lookup(PrincipleCode::SRP, PatternName::Adapter),
        Err(Error::PatternNotInMatrix(PatternName::Adapter))
    );
    assert_eq!(atlas.matrix_view().column_count(), 2);
    assert!(atlas.discrepancies().contains(&Discrepancy::OutsideColumns {
        principle: PrincipleCode::SRP,
        pattern: PatternName::Facade,
        declared_by: Side::Principle,
    }));
}

#[test]
fn matrix_is_five_by_seven() {
    let view = atlas().matrix_view();
    assert_eq!(view.row_count(), 5);
    assert_eq!(
        view.columns,
        [
            "Factory",
            "Strategy",
            "Decorator",
            "Observer",
            "Adapter",
            "Facade",
            "Dependency Injection"
        ]
    );
    assert_eq!(view.rows[0].label, "Single Responsibility (SRP)");
    assert!(view.rows.iter().all(|r| r.cells.len() == 7));
    assert_eq!(view.rows[0].cells[0], Glyph::Placeholder);
    assert_eq!(view.rows[0].cells[0].symbol(), "-");
    assert_eq!(view.rows[0].cells[3].symbol(), "✓");
}

#[test]
fn shipped_sources_disagree_where_expected() {
    let atlas = atlas();
    let found = atlas.discrepancies();
    for pattern in [
        PatternName::Strategy,
        PatternName::Decorator,
        PatternName::DependencyInjection,
    ] {
        assert!(found.contains(&Discrepancy::NotInMatrix {
            principle: PrincipleCode::SRP,
            pattern,
            declared_by: Side::Pattern,
        }));
    }
    assert!(found.contains(&Discrepancy::Asymmetric {
        principle: PrincipleCode::LSP,
        pattern: PatternName::Factory,
        declared_by: Side::Principle,
    }));
    assert!(found.contains(&Discrepancy::MatrixOnly {
        principle: PrincipleCode::LSP,
        pattern: PatternName::Strategy,
    }));
    // reconciling never drops a matrix cell
    assert!(atlas
        .lookup(PrincipleCode::LSP, PatternName::Strategy)
        .unwrap()
        .is_present());
    assert!(!found
        .iter()
        .any(|d| matches!(d, Discrepancy::OutsideColumns { .. })));
}

#[test]
fn adapter_card_lists_its_principles_in_order() {
    let atlas = atlas();
    let record = atlas.catalog().pattern(PatternName::Adapter).unwrap();
    let state = CardState::new(&record.examples).expanded();
    let card = atlas.pattern_card(record, &state);
    let refs: Vec<_> = card
        .visible_cross_refs()
        .iter()
        .map(|r| (r.label, r.note))
        .collect();
    assert_eq!(
        refs,
        [
            ("OCP", Some("Adapts interfaces without modifying original code")),
            (
                "ISP",
                Some("Helps adapt large interfaces into smaller, specific ones")
            ),
            ("LSP", Some("Ensures adapted interface behaves as expected")),
        ]
    );
    assert_eq!(
        card.cross_refs[0].anchor.as_deref(),
        Some("principle-ocp")
    );
}

#[test]
fn pattern_tabs_default_to_typescript() {
    let atlas = atlas();
    let record = atlas.catalog().pattern(PatternName::Strategy).unwrap();
    assert_eq!(
        record.examples.languages(),
        [Language::TypeScript, Language::PHP, Language::Python]
    );

    let mut state = CardState::new(&record.examples).expanded();
    let card = atlas.pattern_card(record, &state);
    assert!(card.show_tabs());
    assert_eq!(card.active_panel().map(|p| p.language), Some(Language::TypeScript));

    state.select_language(Language::PHP).unwrap();
    let card = atlas.pattern_card(record, &state);
    let php = record.examples.get(Language::PHP).unwrap().code;
    assert_eq!(card.visible_example(), Some(php));
    assert_eq!(card.panels.iter().filter(|p| p.active).count(), 1);
}

#[test]
fn principle_cards_carry_a_single_example() {
    let atlas = atlas();
    for record in atlas.list_principles() {
        let mut state = CardState::new(&record.examples);
        assert_eq!(
            state.select_language(Language::Python),
            Err(Error::LanguageNotDeclared(Language::Python))
        );
        let card = atlas.principle_card(record, &state);
        assert!(!card.show_tabs());
        assert_eq!(card.visible_example(), None);
    }
}

#[test]
fn double_toggle_restores_the_card() {
    let atlas = atlas();
    let record = atlas.catalog().principle(PrincipleCode::DIP).unwrap();
    let mut state = CardState::new(&record.examples);
    let before = atlas.principle_card(record, &state).to_html();
    state.toggle();
    let open = atlas.principle_card(record, &state).to_html();
    assert_ne!(before, open);
    state.toggle();
    assert_eq!(atlas.principle_card(record, &state).to_html(), before);
}

#[test]
fn matrix_json_export() {
    let json = serde_json::to_value(atlas().matrix_view()).unwrap();
    assert_eq!(json["columns"][6], "Dependency Injection");
    assert_eq!(json["rows"][0]["principle"], "SRP");
    assert_eq!(json["rows"][0]["cells"][0], "Placeholder");
}

#[test]
fn loaded_atlas_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Atlas>();
    assert_send_sync::<solid_atlas::RelationshipIndex>();
}

#[test]
fn second_spelling_of_a_column_is_rejected() {
    let mut table = data::matrix();
    // the SRP row already has ("Dependency Injection", No)
    table.rows[0].cells.push(("DI", Mark::Note("conflict")));
    let catalog = Catalog::shipped().unwrap();
    assert_eq!(
        Atlas::from_parts(catalog, &table, &data::COLUMNS).unwrap_err(),
        Error::DuplicateCell(PrincipleCode::SRP, PatternName::DependencyInjection)
    );
}
