use super::*;

#[test]
fn builtin_matches_published_compositions() {
    let r = Registry::builtin();
    let ids: Vec<_> = r.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(
        ids,
        [
            "OnlineIcon",
            "DataIcon",
            "AIIcon",
            "PlatformIcon",
            "EcosystemIcon",
            "AnimatedIcon"
        ]
    );
    for e in r.iter() {
        assert_eq!(e.config.fps, Fps { num: 30, den: 1 });
        assert_eq!(e.config.duration_in_frames, 180);
        assert_eq!((e.config.canvas.width, e.config.canvas.height), (800, 800));
    }
}

#[test]
fn unknown_id_lists_known_ones() {
    let err = Registry::builtin().require("Nope").unwrap_err();
    assert!(err.to_string().contains("OnlineIcon"));
}

#[test]
fn duplicate_ids_are_rejected() {
    let e = Registry::builtin().get("DataIcon").cloned().unwrap();
    let err = Registry::from_entries(vec![e.clone(), e]).unwrap_err();
    assert!(err.to_string().contains("duplicate composition id 'DataIcon'"));
}

#[test]
fn instances_get_disjoint_ids() {
    let e = Registry::builtin().get("OnlineIcon").cloned().unwrap();
    let a = e.render_scene_instance(FrameIndex(0), 0);
    let b = e.render_scene_instance(FrameIndex(0), 1);
    let ids = |s: &Scene| -> BTreeSet<String> {
        s.layers
            .iter()
            .flat_map(|l| l.defs.iter().map(|d| d.id().as_str().to_owned()))
            .collect()
    };
    assert!(ids(&a).is_disjoint(&ids(&b)));
    assert!(ids(&a).contains("OnlineIcon-0-cylinderBody"));
}

#[test]
fn ids_differing_only_in_case_get_disjoint_resources() {
    let base = Registry::builtin().get("DataIcon").cloned().unwrap();
    let upper = CompositionEntry {
        id: "AIIcon".to_owned(),
        ..base.clone()
    };
    let mixed = CompositionEntry {
        id: "AiIcon".to_owned(),
        ..base
    };
    let r = Registry::from_entries(vec![upper, mixed]).unwrap();
    let ids = |id: &str| -> BTreeSet<String> {
        r.require(id)
            .unwrap()
            .render_scene(FrameIndex(0))
            .layers
            .iter()
            .flat_map(|l| l.defs.iter().map(|d| d.id().as_str().to_owned()))
            .collect()
    };
    let (a, b) = (ids("AIIcon"), ids("AiIcon"));
    assert!(!a.is_empty());
    assert!(a.is_disjoint(&b));
}

#[test]
fn json_entry_maps_to_config() {
    let json = r#"{ "compositions": [
        { "id": "Small", "icon": "platform", "width": 400, "height": 300, "fps": 24, "duration_in_frames": 48 }
    ] }"#;
    let r = Registry::from_reader(json.as_bytes()).unwrap();
    let e = r.require("Small").unwrap();
    assert_eq!(e.icon, Icon::Platform);
    assert_eq!(e.config.fps.as_f64(), 24.0);
    assert_eq!(e.config.canvas.center().x, 200.0);
}
