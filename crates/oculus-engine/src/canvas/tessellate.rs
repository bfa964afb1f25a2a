use lyon::math::point;
use lyon::tessellation::{
    BuffersBuilder, FillOptions, FillRule, FillTessellator, FillVertex, LineJoin, StrokeOptions,
    StrokeTessellator, StrokeVertex, TessellationError, VertexBuffers,
};

use super::path::Path;
use super::surface::LineCap;

pub(crate) type Mesh = VertexBuffers<[f32; 2], u32>;

fn to_lyon(path: &Path, close_all: bool) -> lyon::path::Path {
    let mut builder = lyon::path::Path::builder();
    for sub in path.subpaths() {
        let Some((first, rest)) = sub.points.split_first() else {
            continue;
        };
        builder.begin(point(first.x as f32, first.y as f32));
        for p in rest {
            builder.line_to(point(p.x as f32, p.y as f32));
        }
        builder.end(close_all);
    }
    builder.build()
}

/// Fills every subpath with the non-zero rule. Open subpaths are closed implicitly.
pub(crate) fn fill(path: &Path, tolerance: f32) -> Result<Mesh, TessellationError> {
    let mut out: Mesh = VertexBuffers::new();
    let opts = FillOptions::tolerance(tolerance).with_fill_rule(FillRule::NonZero);
    FillTessellator::new().tessellate_path(
        &to_lyon(path, true),
        &opts,
        &mut BuffersBuilder::new(&mut out, |v: FillVertex| v.position().to_array()),
    )?;
    Ok(out)
}

/// Strokes every subpath with round joins and the given cap. `width` is in device pixels.
pub(crate) fn stroke(path: &Path, width: f32, cap: LineCap, tolerance: f32) -> Result<Mesh, TessellationError> {
    let mut out: Mesh = VertexBuffers::new();
    let opts = StrokeOptions::tolerance(tolerance)
        .with_line_width(width)
        .with_line_cap(cap.into())
        .with_line_join(LineJoin::Round);
    StrokeTessellator::new().tessellate_path(
        &to_lyon(path, false),
        &opts,
        &mut BuffersBuilder::new(&mut out, |v: StrokeVertex| v.position().to_array()),
    )?;
    Ok(out)
}

impl From<LineCap> for lyon::tessellation::LineCap {
    fn from(cap: LineCap) -> Self {
        match cap {
            LineCap::Butt => Self::Butt,
            LineCap::Round => Self::Round,
            LineCap::Square => Self::Square,
        }
    }
}
