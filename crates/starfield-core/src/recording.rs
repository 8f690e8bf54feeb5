//! A [`DrawSurface`] that records calls instead of rasterizing them.

use crate::surface::{BlendMode, DrawSurface, PostFilter, RadialGradient, Rect, Rgba, SurfaceError};
use glam::Vec2;

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Resize { backing: (u32, u32), logical: (f32, f32) },
    SetScale(f32),
    Clear { width: f32, height: f32 },
    SetBlend(BlendMode),
    FillCircle { center: Vec2, radius: f32, color: Rgba },
    FillRadialGradient { gradient: RadialGradient, rect: Rect },
    Filter(PostFilter),
}

#[derive(Clone, Debug, Default)]
pub struct RecordingSurface {
    pub commands: Vec<DrawCommand>,
    /// When false, `apply_filter` fails with `FilterUnsupported`.
    pub supports_filter: bool,
    pub backing: (u32, u32),
    pub logical: (f32, f32),
    pub scale: f32,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self {
            supports_filter: true,
            scale: 1.0,
            ..Default::default()
        }
    }

    pub fn without_filter() -> Self {
        Self {
            supports_filter: false,
            ..Self::new()
        }
    }

    /// Commands issued since the most recent `Clear`.
    pub fn since_last_clear(&self) -> &[DrawCommand] {
        let start = self
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Clear { .. }))
            .map(|i| i + 1)
            .unwrap_or(0);
        &self.commands[start..]
    }

    pub fn circles(&self) -> impl Iterator<Item = (Vec2, f32, Rgba)> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillCircle {
                center,
                radius,
                color,
            } => Some((*center, *radius, *color)),
            _ => None,
        })
    }

    pub fn gradients(&self) -> impl Iterator<Item = &RadialGradient> + '_ {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::FillRadialGradient { gradient, .. } => Some(gradient),
            _ => None,
        })
    }

    pub fn take(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }
}

impl DrawSurface for RecordingSurface {
    fn resize(&mut self, backing: (u32, u32), logical: (f32, f32)) {
        self.backing = backing;
        self.logical = logical;
        self.commands.push(DrawCommand::Resize { backing, logical });
    }

    fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
        self.commands.push(DrawCommand::SetScale(scale));
    }

    fn clear(&mut self, width: f32, height: f32) {
        self.commands.push(DrawCommand::Clear { width, height });
    }

    fn set_blend(&mut self, blend: BlendMode) {
        self.commands.push(DrawCommand::SetBlend(blend));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn fill_radial_gradient(&mut self, gradient: &RadialGradient, rect: Rect) {
        self.commands.push(DrawCommand::FillRadialGradient {
            gradient: gradient.clone(),
            rect,
        });
    }

    fn apply_filter(
        &mut self,
        filter: &PostFilter,
        _width: f32,
        _height: f32,
    ) -> Result<(), SurfaceError> {
        if !self.supports_filter {
            return Err(SurfaceError::FilterUnsupported);
        }
        self.commands.push(DrawCommand::Filter(*filter));
        Ok(())
    }
}
