//! Shape generation for 2D primitives
//!
//! All shapes are emitted as triangle lists in playfield coordinates.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Filled axis-aligned rectangle (two triangles)
pub fn rect(pos: Vec2, size: Vec2, color: [f32; 4]) -> [Vertex; 6] {
    vertical_gradient_rect(pos, size, color, color)
}

/// Rectangle shaded from `top` to `bottom`
pub fn vertical_gradient_rect(
    pos: Vec2,
    size: Vec2,
    top: [f32; 4],
    bottom: [f32; 4],
) -> [Vertex; 6] {
    let (x0, y0) = (pos.x, pos.y);
    let (x1, y1) = (pos.x + size.x, pos.y + size.y);
    [
        Vertex::new(x0, y0, top),
        Vertex::new(x1, y0, top),
        Vertex::new(x0, y1, bottom),
        Vertex::new(x0, y1, bottom),
        Vertex::new(x1, y0, top),
        Vertex::new(x1, y1, bottom),
    ]
}

/// Filled circle as a triangle fan
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Upward-pointing triangle (launch prompt chevron)
pub fn chevron(center: Vec2, size: f32, color: [f32; 4]) -> [Vertex; 3] {
    let half = size / 2.0;
    [
        Vertex::new(center.x, center.y - half, color),
        Vertex::new(center.x + half, center.y + half, color),
        Vertex::new(center.x - half, center.y + half, color),
    ]
}

/// Lit segments per digit, bit 0..6 = top, upper right, lower right, bottom,
/// lower left, upper left, middle
const DIGIT_SEGMENTS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

/// Decimal number drawn as seven-segment strokes, centered on `center`
pub fn number(value: u32, center: Vec2, height: f32, color: [f32; 4]) -> Vec<Vertex> {
    let digits: Vec<u32> = value
        .to_string()
        .chars()
        .filter_map(|c| c.to_digit(10))
        .collect();
    let width = height * 0.5;
    let stroke = (height * 0.12).max(1.0);
    let gap = stroke * 2.0;
    let half = height / 2.0;
    let total = digits.len() as f32 * (width + gap) - gap;
    let top = center.y - half;

    let mut vertices = Vec::with_capacity(digits.len() * 7 * 6);
    let mut x = center.x - total / 2.0;
    for digit in digits {
        let segments = [
            (Vec2::new(x, top), Vec2::new(width, stroke)),
            (Vec2::new(x + width - stroke, top), Vec2::new(stroke, half)),
            (Vec2::new(x + width - stroke, top + half), Vec2::new(stroke, half)),
            (Vec2::new(x, top + height - stroke), Vec2::new(width, stroke)),
            (Vec2::new(x, top + half), Vec2::new(stroke, half)),
            (Vec2::new(x, top), Vec2::new(stroke, half)),
            (Vec2::new(x, top + half - stroke / 2.0), Vec2::new(width, stroke)),
        ];
        let lit = DIGIT_SEGMENTS[digit as usize];
        for (bit, (pos, size)) in segments.into_iter().enumerate() {
            if lit & (1 << bit) != 0 {
                vertices.extend_from_slice(&rect(pos, size, color));
            }
        }
        x += width + gap;
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_corners() {
        let verts = rect(Vec2::new(10.0, 20.0), Vec2::new(30.0, 40.0), [1.0; 4]);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_circle_stays_within_radius() {
        let center = Vec2::new(100.0, 100.0);
        let verts = circle(center, 8.0, [1.0; 4], 12);
        assert_eq!(verts.len(), 36);
        for v in verts {
            let d = Vec2::from(v.position).distance(center);
            assert!(d <= 8.0 + 1e-4);
        }
    }

    #[test]
    fn test_circle_minimum_segments() {
        assert_eq!(circle(Vec2::ZERO, 1.0, [1.0; 4], 0).len(), 9);
    }

    #[test]
    fn test_number_segments() {
        // 8 lights every segment, 1 only the right side
        assert_eq!(number(8, Vec2::ZERO, 10.0, [1.0; 4]).len(), 7 * 6);
        assert_eq!(number(1, Vec2::ZERO, 10.0, [1.0; 4]).len(), 2 * 6);
        assert_eq!(number(10, Vec2::ZERO, 10.0, [1.0; 4]).len(), (2 + 6) * 6);
    }

    #[test]
    fn test_number_centered() {
        let center = Vec2::new(100.0, 50.0);
        let verts = number(42, center, 12.0, [1.0; 4]);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        let (min_x, max_x) = (
            xs.iter().cloned().fold(f32::MAX, f32::min),
            xs.iter().cloned().fold(f32::MIN, f32::max),
        );
        assert!(((min_x + max_x) / 2.0 - center.x).abs() < 1e-3);
        assert!(ys.iter().all(|y| (44.0..=56.0).contains(y)));
    }
}
