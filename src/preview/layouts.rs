//! Fixed decorative layouts, one function per design.

use super::{
    Backdrop, GradientDirection, PreviewElement, Shape, TapestryPreview, UnitRect, CANVAS_HEIGHT,
    CANVAS_WIDTH,
};
use crate::models::{ColorKey, ColorMapping, Design};

const FRINGE_HEIGHT: f32 = 3.0;
const FRINGE_THREADS: u8 = 12;
const PETAL_ANGLES: [f32; 8] = [0.0, 45.0, 90.0, 135.0, 180.0, 225.0, 270.0, 315.0];
const PETAL_RADIUS: f32 = 3.0;

fn element(name: &'static str, shape: Shape, colors: &ColorMapping, key: ColorKey, rect: UnitRect) -> PreviewElement {
    PreviewElement {
        name,
        shape,
        color: colors.get(key).to_string(),
        rect,
    }
}

fn fringe_band(colors: &ColorMapping) -> PreviewElement {
    element(
        "fringe",
        Shape::Rect,
        colors,
        ColorKey::Fringe,
        UnitRect::new(0.0, CANVAS_HEIGHT - FRINGE_HEIGHT, CANVAS_WIDTH, FRINGE_HEIGHT),
    )
}

fn color(colors: &ColorMapping, key: ColorKey) -> String {
    colors.get(key).to_string()
}

pub(super) fn sunflowers(colors: &ColorMapping) -> TapestryPreview {
    let mut elements = Vec::new();

    elements.push(element(
        "sun",
        Shape::Disc,
        colors,
        ColorKey::Sun,
        UnitRect::new(18.0, 6.0, 12.0, 12.0),
    ));

    // Two flowers, 8 units wide with a 2 unit gap, centered
    for left in [15.0, 25.0] {
        let (cx, cy) = (left + 4.0, 32.0);
        for angle in PETAL_ANGLES {
            let (sin, cos) = angle.to_radians().sin_cos();
            elements.push(element(
                "petal",
                Shape::Petal(angle),
                colors,
                ColorKey::SunflowerPetals,
                UnitRect::centered(cx + PETAL_RADIUS * sin, cy - PETAL_RADIUS * cos, 2.0, 4.0),
            ));
        }
        elements.push(element(
            "flower center",
            Shape::Disc,
            colors,
            ColorKey::SunflowerCenter,
            UnitRect::centered(cx, cy, 3.0, 3.0),
        ));
    }

    // Stems end 16 units above the bottom; leaves point outwards
    let stem_top = CANVAS_HEIGHT - 16.0 - 12.0;
    for (stem_x, leaf_x, tilt) in [(22.0, 19.0, 30.0), (25.0, 26.0, -30.0)] {
        elements.push(element(
            "stem",
            Shape::Rect,
            colors,
            ColorKey::Stems,
            UnitRect::new(stem_x, stem_top, 1.0, 12.0),
        ));
        elements.push(element(
            "leaf",
            Shape::Petal(tilt),
            colors,
            ColorKey::Leaves,
            UnitRect::new(leaf_x, stem_top + 3.0, 3.0, 2.0),
        ));
    }

    elements.push(fringe_band(colors));
    let spacing = CANVAS_WIDTH / f32::from(FRINGE_THREADS);
    for i in 0..FRINGE_THREADS {
        let x = spacing * (f32::from(i) + 0.5);
        elements.push(element(
            "fringe thread",
            Shape::Rect,
            colors,
            ColorKey::Fringe,
            UnitRect::new(x - 0.125, CANVAS_HEIGHT, 0.25, 2.0),
        ));
    }

    elements.push(element(
        "cord",
        Shape::Rect,
        colors,
        ColorKey::Fringe,
        UnitRect::new(CANVAS_WIDTH / 2.0 - 0.125, -4.0, 0.25, 4.0),
    ));
    elements.push(element(
        "hook",
        Shape::Disc,
        colors,
        ColorKey::Fringe,
        UnitRect::centered(CANVAS_WIDTH / 2.0, -5.0, 2.0, 2.0),
    ));

    let bg1 = color(colors, ColorKey::Background1);
    let bg2 = color(colors, ColorKey::Background2);
    TapestryPreview {
        design: Design::Sunflowers,
        backdrop: Backdrop::Stripes {
            bands: vec![bg1.clone(), bg2.clone(), bg1.clone(), bg2, bg1],
        },
        border: color(colors, ColorKey::Fringe),
        elements,
    }
}

pub(super) fn roses(colors: &ColorMapping) -> TapestryPreview {
    TapestryPreview {
        design: Design::Roses,
        backdrop: Backdrop::Gradient {
            direction: GradientDirection::Vertical,
            stops: vec![
                color(colors, ColorKey::Background1),
                color(colors, ColorKey::Background2),
            ],
        },
        border: color(colors, ColorKey::Fringe),
        elements: vec![
            PreviewElement {
                name: "rose",
                shape: Shape::Glyph("🌹"),
                color: color(colors, ColorKey::SunflowerPetals),
                rect: UnitRect::centered(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0, 15.0, 15.0),
            },
            fringe_band(colors),
        ],
    }
}

pub(super) fn abstract_shapes(colors: &ColorMapping) -> TapestryPreview {
    TapestryPreview {
        design: Design::Abstract,
        backdrop: Backdrop::Gradient {
            direction: GradientDirection::Diagonal,
            stops: vec![
                color(colors, ColorKey::Background1),
                color(colors, ColorKey::Background2),
                color(colors, ColorKey::SunflowerPetals),
            ],
        },
        border: color(colors, ColorKey::Fringe),
        elements: vec![
            element(
                "sun",
                Shape::Disc,
                colors,
                ColorKey::Sun,
                UnitRect::new(8.0, 8.0, 16.0, 16.0),
            ),
            element(
                "mountain",
                Shape::Triangle,
                colors,
                ColorKey::Stems,
                UnitRect::new(CANVAS_WIDTH - 8.0 - 12.0, CANVAS_HEIGHT - 16.0 - 12.0, 12.0, 12.0),
            ),
            fringe_band(colors),
        ],
    }
}

pub(super) fn geometric(colors: &ColorMapping) -> TapestryPreview {
    TapestryPreview {
        design: Design::Geometric,
        backdrop: Backdrop::Solid {
            color: color(colors, ColorKey::Background1),
        },
        border: color(colors, ColorKey::Fringe),
        elements: vec![
            element(
                "diamond",
                Shape::Diamond,
                colors,
                ColorKey::Sun,
                UnitRect::new(18.0, 8.0, 12.0, 12.0),
            ),
            element(
                "hexagon",
                Shape::Hexagon,
                colors,
                ColorKey::SunflowerPetals,
                UnitRect::new(16.0, 28.0, 16.0, 16.0),
            ),
            fringe_band(colors),
        ],
    }
}
