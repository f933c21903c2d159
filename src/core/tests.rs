#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use crate::core::{
        EngineConfig, PanelFrame, PanelSurface, ScrollStackEngine, StickPosition, layout,
    };

    /// Panel stub that records what the engine applied
    struct StubPanel {
        top: Cell<f64>,
        applied: RefCell<Vec<PanelFrame>>,
    }

    impl StubPanel {
        fn at(top: f64) -> Self {
            Self {
                top: Cell::new(top),
                applied: RefCell::new(Vec::new()),
            }
        }

        fn last_applied(&self) -> Option<PanelFrame> {
            self.applied.borrow().last().cloned()
        }
    }

    impl PanelSurface for StubPanel {
        fn viewport_top(&self) -> f64 {
            self.top.get()
        }

        fn apply(&self, frame: &PanelFrame) {
            self.applied.borrow_mut().push(frame.clone());
        }
    }

    /// Panels laid out in document flow, scrolled by `scroll` pixels
    fn panel_tops(count: usize, pitch: f64, origin: f64, scroll: f64) -> Vec<f64> {
        (0..count)
            .map(|i| origin + i as f64 * pitch - scroll)
            .collect()
    }

    fn configs() -> Vec<EngineConfig> {
        vec![
            EngineConfig::default(),
            EngineConfig::default()
                .with_spacing(200.0)
                .with_stack_offset_step(12.0)
                .with_stick_position(StickPosition::Percent(15.0))
                .with_blur_max(4.0),
            EngineConfig::default()
                .with_stack_offset_step(0.0)
                .with_scale_shrink(0.3)
                .with_stick_position(StickPosition::Pixels(96.0))
                .with_blur_max(10.0),
        ]
    }

    // ========================================================================
    // Invariants
    // ========================================================================

    #[test]
    fn test_z_order_strictly_increasing() {
        for config in configs() {
            for count in 1..8 {
                let frames = layout(&config, 900.0, &panel_tops(count, 500.0, 100.0, 0.0));
                assert_eq!(frames.len(), count);
                for pair in frames.windows(2) {
                    assert!(pair[0].z_order < pair[1].z_order);
                }
            }
        }
    }

    #[test]
    fn test_scale_bounded_and_non_increasing_with_scroll() {
        for config in configs() {
            let mut previous: Option<Vec<f64>> = None;
            for step in 0..120 {
                let scroll = step as f64 * 25.0;
                let frames = layout(&config, 900.0, &panel_tops(4, 560.0, 200.0, scroll));
                let scales: Vec<f64> = frames.iter().map(|f| f.scale).collect();

                for scale in &scales[..3] {
                    assert!(*scale >= 1.0 - config.scale_shrink - 1e-12);
                    assert!(*scale <= 1.0);
                }
                if let Some(prev) = &previous {
                    for i in 0..3 {
                        assert!(scales[i] <= prev[i] + 1e-12, "panel {i} grew at scroll {scroll}");
                    }
                }
                previous = Some(scales);
            }
        }
    }

    #[test]
    fn test_blur_bounded_and_non_decreasing_with_scroll() {
        for config in configs() {
            let mut previous: Option<Vec<f64>> = None;
            for step in 0..120 {
                let scroll = step as f64 * 25.0;
                let frames = layout(&config, 900.0, &panel_tops(4, 560.0, 200.0, scroll));
                let blurs: Vec<f64> = frames.iter().map(|f| f.blur_radius).collect();

                for blur in &blurs[..3] {
                    assert!(*blur >= 0.0);
                    assert!(*blur <= config.blur_max + 1e-12);
                }
                if let Some(prev) = &previous {
                    for i in 0..3 {
                        assert!(blurs[i] + 1e-12 >= prev[i]);
                    }
                }
                previous = Some(blurs);
            }
        }
    }

    #[test]
    fn test_last_panel_never_shrinks_or_blurs() {
        for config in configs() {
            for step in 0..60 {
                let tops = panel_tops(3, 400.0, 100.0, step as f64 * 50.0);
                let frames = layout(&config, 800.0, &tops);
                let last = frames.last().unwrap();

                assert_eq!(last.progress, 0.0);
                assert_eq!(last.scale, 1.0);
                assert_eq!(last.blur_radius, 0.0);
                assert_eq!(last.spacing, 0.0);
            }
        }
    }

    #[test]
    fn test_struct_literal_config_is_clamped() {
        let config = EngineConfig {
            scale_shrink: 1.5,
            blur_max: -3.0,
            ..Default::default()
        };
        let frames = layout(&config, 1000.0, &[0.0, 0.0]);

        assert_eq!(frames[0].progress, 1.0);
        assert_eq!(frames[0].scale, 0.0);
        assert_eq!(frames[0].blur_radius, 0.0);
        assert!(!frames[0].blur_enabled);
        assert_eq!(frames[0].filter_css(), None);
    }

    #[test]
    fn test_deserialized_config_is_clamped() {
        let config: EngineConfig = serde_json::from_str(
            r#"{"spacing":-40.0,"stack_offset_step":-5.0,"scale_shrink":-0.2,
                "stick_position":{"Pixels":100.0},"blur_max":2.0}"#,
        )
        .unwrap();
        let engine = ScrollStackEngine::new(config);
        let panels = vec![StubPanel::at(100.0), StubPanel::at(100.0)];

        let frames = engine.recompute(1000.0, &panels);
        assert_eq!(frames[0].spacing, 0.0);
        assert_eq!(frames[1].sticky_offset, 100.0);
        assert_eq!(frames[0].scale, 1.0);
        assert_eq!(frames[0].blur_radius, 2.0);
    }

    #[test]
    fn test_sticky_offsets_exact() {
        let config = EngineConfig::default()
            .with_stack_offset_step(7.5)
            .with_stick_position(StickPosition::Pixels(40.0));
        let frames = layout(&config, 1000.0, &[0.0; 6]);

        for frame in &frames {
            assert_eq!(frame.sticky_offset, 40.0 + frame.index as f64 * 7.5);
        }
    }

    #[test]
    fn test_recompute_idempotent() {
        let engine = ScrollStackEngine::new(configs()[1].clone());
        let panels: Vec<StubPanel> = [120.0, 300.0, 650.0, 1400.0]
            .into_iter()
            .map(StubPanel::at)
            .collect();

        let first = engine.recompute(900.0, &panels);
        let second = engine.recompute(900.0, &panels);

        assert_eq!(first, second);
        for panel in &panels {
            assert_eq!(panel.applied.borrow().len(), 2);
        }
    }

    // ========================================================================
    // Scenarios
    // ========================================================================

    #[test]
    fn test_scenario_four_panel_offsets() {
        let config = EngineConfig::default()
            .with_stack_offset_step(12.0)
            .with_stick_position(StickPosition::Pixels(96.0));
        let frames = layout(&config, 900.0, &[96.0, 400.0, 800.0, 1200.0]);

        let offsets: Vec<f64> = frames.iter().map(|f| f.sticky_offset).collect();
        assert_eq!(offsets, vec![96.0, 108.0, 120.0, 132.0]);
    }

    #[test]
    fn test_scenario_successor_at_stick_point() {
        let config = EngineConfig::default()
            .with_stack_offset_step(12.0)
            .with_stick_position(StickPosition::Pixels(96.0))
            .with_scale_shrink(0.05)
            .with_blur_max(4.0);
        // panel 1 sticks at 108
        let frames = layout(&config, 900.0, &[96.0, 108.0]);

        assert_eq!(frames[0].progress, 1.0);
        assert_eq!(frames[0].scale, 1.0 - 0.05);
        assert_eq!(frames[0].blur_radius, 4.0);
    }

    #[test]
    fn test_scenario_successor_beyond_zone() {
        let config = EngineConfig::default()
            .with_stick_position(StickPosition::Pixels(100.0))
            .with_blur_max(4.0);
        let viewport = 1000.0;
        let zone = viewport * 0.8;
        let next_stick = 100.0 + 30.0;

        for extra in [0.0, 1.0, 500.0] {
            let frames = layout(&config, viewport, &[100.0, next_stick + zone + extra]);
            assert_eq!(frames[0].progress, 0.0);
            assert_eq!(frames[0].scale, 1.0);
            assert_eq!(frames[0].blur_radius, 0.0);
        }
    }

    #[test]
    fn test_scenario_resize_reresolves_percent_anchor() {
        let engine = ScrollStackEngine::new(
            EngineConfig::default().with_stick_position(StickPosition::Percent(20.0)),
        );
        let panels = vec![StubPanel::at(0.0), StubPanel::at(900.0)];

        let before = engine.recompute(1000.0, &panels);
        assert_eq!(before[0].sticky_offset, 200.0);
        assert_eq!(before[1].sticky_offset, 230.0);

        let after = engine.recompute(500.0, &panels);
        assert_eq!(after[0].sticky_offset, 100.0);
        assert_eq!(after[1].sticky_offset, 130.0);
    }

    #[test]
    fn test_scenario_signal_after_teardown_is_ignored() {
        let mut engine = ScrollStackEngine::new(EngineConfig::default());
        let panels = vec![StubPanel::at(0.0), StubPanel::at(500.0)];

        engine.recompute(800.0, &panels);
        assert!(engine.on_signal());
        engine.detach();

        assert!(!engine.on_signal());
        assert_eq!(engine.run_frame(800.0, &panels), None);
        assert!(engine.recompute(800.0, &panels).is_empty());
        assert_eq!(panels[0].applied.borrow().len(), 1);
        assert!(!engine.is_attached());
    }

    // ========================================================================
    // Engine behaviour
    // ========================================================================

    #[test]
    fn test_signals_coalesce_into_one_recompute() {
        let mut engine = ScrollStackEngine::new(EngineConfig::default());
        let panels = vec![StubPanel::at(0.0), StubPanel::at(700.0)];

        assert!(engine.on_signal());
        assert!(!engine.on_signal());
        assert!(!engine.on_signal());
        assert!(engine.has_pending_frame());

        // latest geometry wins: next stick point 150, zone 640
        panels[1].top.set(470.0);
        let frames = engine.run_frame(800.0, &panels).unwrap();
        assert_eq!(frames[0].progress, 0.5);
        assert_eq!(panels[0].applied.borrow().len(), 1);

        assert!(!engine.has_pending_frame());
        assert_eq!(engine.run_frame(800.0, &panels), None);
        assert!(engine.on_signal());
    }

    #[test]
    fn test_recompute_empty_is_noop() {
        let engine = ScrollStackEngine::new(EngineConfig::default());
        let panels: Vec<StubPanel> = Vec::new();
        assert!(engine.recompute(800.0, &panels).is_empty());
    }

    #[test]
    fn test_recompute_applies_every_panel() {
        let engine = ScrollStackEngine::new(EngineConfig::default().with_blur_max(2.0));
        let panels: Vec<StubPanel> = (0..5).map(|i| StubPanel::at(i as f64 * 300.0)).collect();

        let frames = engine.recompute(1000.0, &panels);
        for (panel, frame) in panels.iter().zip(&frames) {
            assert_eq!(panel.last_applied().as_ref(), Some(frame));
        }
    }
}
