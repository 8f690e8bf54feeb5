// Nebula blob planning and drawing.

use starfield_core::nebula::NEBULA_FILTER;
use starfield_core::{
    BlendMode, DrawCommand, FilterOutcome, NebulaRenderer, RecordingSurface, Rgba, Theme,
    Viewport,
};

fn viewport() -> Viewport {
    Viewport::new(800.0, 600.0, 1.0)
}

#[test]
fn blobs_stay_within_overshoot_and_radius_bounds() {
    let vp = viewport();
    let mut renderer = NebulaRenderer::new(64, 5);
    let plan = renderer.plan(&vp, Theme::Dark);
    assert_eq!(plan.len(), 64);
    for blob in &plan {
        let g = &blob.gradient;
        assert!(g.center.x >= -160.0 && g.center.x <= 960.0);
        assert!(g.center.y >= -120.0 && g.center.y <= 720.0);
        assert!(g.outer_radius >= 480.0 && g.outer_radius <= 960.0);
        assert!((g.inner_radius - g.outer_radius * 0.08).abs() < 1e-3);
        assert!((blob.bounds.width - 2.0 * g.outer_radius).abs() < 1e-3);
        assert!((blob.bounds.x - (g.center.x - g.outer_radius)).abs() < 1e-3);
    }
}

#[test]
fn palette_cycles_by_blob_index() {
    let vp = viewport();
    for theme in [Theme::Dark, Theme::Light] {
        let palette = theme.nebula_palette();
        let plan = NebulaRenderer::new(7, 9).plan(&vp, theme);
        for (i, blob) in plan.iter().enumerate() {
            let stops = &blob.gradient.stops;
            assert_eq!(stops.len(), 3);
            assert_eq!(stops[0].offset, 0.0);
            assert_eq!(stops[0].color, palette.inner[i % 3]);
            assert_eq!(stops[1].offset, 0.35);
            assert_eq!(stops[1].color, palette.mid);
            assert_eq!(stops[2].offset, 1.0);
            assert_eq!(stops[2].color, Rgba::TRANSPARENT);
        }
    }
}

#[test]
fn same_seed_gives_identical_plans() {
    let vp = viewport();
    let a = NebulaRenderer::new(3, 1234).plan(&vp, Theme::Light);
    let b = NebulaRenderer::new(3, 1234).plan(&vp, Theme::Light);
    assert_eq!(a, b);
}

#[test]
fn draw_clears_then_blends_additively_and_filters() {
    let vp = viewport();
    let mut surface = RecordingSurface::new();
    let outcome = NebulaRenderer::new(3, 2).draw(&mut surface, &vp, Theme::Dark);
    assert_eq!(outcome, FilterOutcome::Applied);

    let cmds = &surface.commands;
    assert_eq!(
        cmds[0],
        DrawCommand::Clear {
            width: 800.0,
            height: 600.0
        }
    );
    let body = &cmds[1..cmds.len() - 1];
    assert_eq!(body.len(), 9);
    for chunk in body.chunks(3) {
        assert_eq!(chunk[0], DrawCommand::SetBlend(BlendMode::Lighter));
        assert!(matches!(chunk[1], DrawCommand::FillRadialGradient { .. }));
        assert_eq!(chunk[2], DrawCommand::SetBlend(BlendMode::SourceOver));
    }
    assert_eq!(cmds.last(), Some(&DrawCommand::Filter(NEBULA_FILTER)));
}

#[test]
fn unsupported_filter_keeps_unblurred_gradients() {
    let vp = viewport();
    let mut surface = RecordingSurface::without_filter();
    let outcome = NebulaRenderer::new(3, 2).draw(&mut surface, &vp, Theme::Dark);
    assert_eq!(outcome, FilterOutcome::Skipped);
    assert_eq!(surface.gradients().count(), 3);
    assert!(!surface
        .commands
        .iter()
        .any(|c| matches!(c, DrawCommand::Filter(_))));
}

#[test]
fn zero_blobs_only_clears() {
    let vp = viewport();
    let mut surface = RecordingSurface::new();
    NebulaRenderer::new(0, 2).draw(&mut surface, &vp, Theme::Light);
    assert_eq!(surface.gradients().count(), 0);
}
