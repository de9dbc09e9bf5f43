use sandfall_engine::{matter_sand, Simulation};

#[test]
fn perf_smoke_step() {
    let mut sim = Simulation::new(128, 64).unwrap();
    sim.enable_perf_metrics(true);
    sim.set_draw_matter(matter_sand());
    sim.set_brush_radius(0.0);
    for x in 0..128 {
        sim.paint_stroke(x, 0, x, 31);
    }
    sim.set_move_steps(4);
    sim.step();

    let stats = sim.get_perf_stats();
    assert!(stats.step_ms() >= 0.0);
    assert!(stats.draw_ms() >= 0.0);
    assert_eq!(stats.sub_steps(), 4);
    assert_eq!(stats.non_empty_cells(), 128 * 32);
    assert_eq!(sim.sim_step(), 1);
    assert_eq!(sim.move_step(), 4);
}

#[test]
fn display_buffer_matches_canvas() {
    let mut sim = Simulation::new(64, 48).unwrap();
    sim.paint(32, 10);
    sim.step();
    assert_eq!(sim.display_len(), 64 * 48);
    assert_eq!(sim.display_len_bytes(), 64 * 48 * 4);
    assert!(!sim.display_ptr().is_null());
    assert_eq!(sim.world_to_screen().len(), 16);
}

#[test]
fn config_json_builds_a_simulation() {
    let sim = Simulation::from_config(
        r#"{"width": 96, "height": 64, "workgroupX": 32, "workgroupY": 8, "brushSeed": 7}"#,
    )
    .unwrap();
    assert_eq!(sim.width(), 96);
    assert_eq!(sim.height(), 64);
    assert_eq!(sim.matter_count(), 0);
}
