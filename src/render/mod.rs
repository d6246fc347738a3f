mod classify;
mod layout;
mod primitive;

pub use classify::{classify, Zone, ZoneGrid};
pub use layout::Layout;
pub use primitive::*;

use tracing::debug;

use crate::builder::RenderConfig;
use crate::common::{ModuleMatrix, ModuleSource, QRResult};

/// Encodes `data` and renders it. Nothing is returned unless every step succeeds.
pub fn render_qr_code(data: &str, config: &RenderConfig) -> QRResult<Vec<Primitive>> {
    config.validate()?;
    let matrix = ModuleMatrix::encode(data, config.ec_level)?;
    render_matrix(&matrix, config)
}

/// Renders an already encoded module grid.
pub fn render_matrix<M: ModuleSource + ?Sized>(
    source: &M,
    config: &RenderConfig,
) -> QRResult<Vec<Primitive>> {
    let layout = Layout::new(source.module_count(), config)?;
    let zones = ZoneGrid::classify(source, &layout)?;

    let mut primitives = Vec::with_capacity(zones.count(Zone::Data) + 6);
    primitives.push(Primitive::Background {
        rect: Rect::square(0.0, 0.0, layout.size()),
        color: config.background,
    });
    emit_dots(&zones, &layout, config, &mut primitives);
    emit_eyes(&layout, config, &mut primitives);
    emit_logo(&layout, config, &mut primitives);

    debug!(
        module_count = layout.module_count(),
        cell_size = layout.cell_size(),
        primitives = primitives.len(),
        "Rendered QR"
    );
    Ok(primitives)
}

fn emit_dots(zones: &ZoneGrid, layout: &Layout, config: &RenderConfig, out: &mut Vec<Primitive>) {
    let r = layout.cell_size() / 2.0;
    out.extend(zones.iter().filter(|&(_, _, z)| z == Zone::Data).map(|(row, col, _)| {
        let cell = layout.cell_rect(row, col);
        Primitive::Dot(Dot { cx: cell.x + r, cy: cell.y + r, r, color: config.foreground })
    }));
}

fn emit_eyes(layout: &Layout, config: &RenderConfig, out: &mut Vec<Primitive>) {
    let outer_radius = layout.eye_radius();
    out.extend(layout.eye_centers().into_iter().map(|(cx, cy)| {
        Primitive::EyeMarker(EyeMarker {
            cx,
            cy,
            outer_radius,
            foreground: config.foreground,
            background: config.background,
        })
    }));
}

fn emit_logo(layout: &Layout, config: &RenderConfig, out: &mut Vec<Primitive>) {
    let center = layout.size() / 2.0;
    let ring = Ring {
        circle: Circle::new(center, center, (config.logo_size + config.logo_border_width) / 2.0),
        fill: config.background,
        stroke: config.foreground,
        stroke_width: config.logo_border_width,
    };
    out.push(Primitive::LogoMask(LogoMask {
        rect: layout.mask_rect(),
        color: config.background,
        ring,
    }));

    if let Some(source) = &config.logo {
        out.push(Primitive::LogoImage(LogoImage { rect: layout.logo_rect(), source: source.clone() }));
    }
}
