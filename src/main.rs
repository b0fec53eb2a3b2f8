//! Offline demo renderer for the scan-conversion and clipping kernel.
//!
//! Each demo runs one algorithm on the classic input scene, draws the
//! result into a [`Canvas`], writes a PNG next to the working directory,
//! and prints a short run summary. Select a demo by name, or run them all
//! with no argument.

use rasterly::colors;
use rasterly::prelude::*;

const WINDOW_WIDTH: u32 = 800;
const WINDOW_HEIGHT: u32 = 600;

/// Maps a world-space rectangle onto canvas coordinates (world y up,
/// canvas y down).
struct Viewport {
    x_min: f32,
    y_min: f32,
    x_max: f32,
    y_max: f32,
    width: u32,
    height: u32,
}

impl Viewport {
    fn new(x_min: f32, y_min: f32, x_max: f32, y_max: f32, width: u32, height: u32) -> Self {
        Self {
            x_min,
            y_min,
            x_max,
            y_max,
            width,
            height,
        }
    }

    fn to_screen(&self, p: Vec2) -> Pixel {
        let tx = (p.x - self.x_min) / (self.x_max - self.x_min);
        let ty = (p.y - self.y_min) / (self.y_max - self.y_min);
        Pixel::rounding(Vec2::new(
            tx * (self.width - 1) as f32,
            (1.0 - ty) * (self.height - 1) as f32,
        ))
    }
}

/// Draw a world-space segment with the given line strategy.
fn draw_segment(canvas: &mut Canvas, viewport: &Viewport, segment: Segment, color: u32) {
    let p1 = viewport.to_screen(segment.p1);
    let p2 = viewport.to_screen(segment.p2);
    canvas.plot(&bresenham_line(p1, p2), color);
}

/// Draw a closed vertex loop edge by edge.
fn draw_polygon_outline(canvas: &mut Canvas, viewport: &Viewport, vertices: &[Vec2], color: u32) {
    for i in 0..vertices.len() {
        let start = vertices[i];
        let end = vertices[(i + 1) % vertices.len()];
        draw_segment(canvas, viewport, Segment::new(start, end), color);
    }
}

/// Scene selection, one variant per algorithm demo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Demo {
    DdaLine,
    BresenhamLine,
    MidpointCircle,
    MidpointEllipse,
    LineClip,
    PolygonClip,
    Composite2d,
}

impl Demo {
    const ALL: [Demo; 7] = [
        Demo::DdaLine,
        Demo::BresenhamLine,
        Demo::MidpointCircle,
        Demo::MidpointEllipse,
        Demo::LineClip,
        Demo::PolygonClip,
        Demo::Composite2d,
    ];

    fn name(self) -> &'static str {
        match self {
            Demo::DdaLine => "dda-line",
            Demo::BresenhamLine => "bresenham-line",
            Demo::MidpointCircle => "midpoint-circle",
            Demo::MidpointEllipse => "midpoint-ellipse",
            Demo::LineClip => "line-clip",
            Demo::PolygonClip => "polygon-clip",
            Demo::Composite2d => "composite-2d",
        }
    }

    fn from_name(name: &str) -> Option<Demo> {
        Demo::ALL.into_iter().find(|demo| demo.name() == name)
    }

    fn run(self) -> Result<(), String> {
        match self {
            Demo::DdaLine => run_dda_line(),
            Demo::BresenhamLine => run_bresenham_line(),
            Demo::MidpointCircle => run_midpoint_circle(),
            Demo::MidpointEllipse => run_midpoint_ellipse(),
            Demo::LineClip => run_line_clip(),
            Demo::PolygonClip => run_polygon_clip(),
            Demo::Composite2d => run_composite_2d(),
        }
    }
}

fn save(canvas: &Canvas, name: &str) -> Result<(), String> {
    let path = format!("{name}.png");
    canvas.save_png(&path).map_err(|e| e.to_string())?;
    println!("  wrote {path}");
    Ok(())
}

fn run_dda_line() -> Result<(), String> {
    println!("DDA Line Drawing Algorithm");

    let mut canvas = Canvas::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let segment = Segment::new(Vec2::new(100.0, 100.0), Vec2::new(600.0, 400.0));

    let pixels = rasterize_segment(LineAlgorithm::Dda, segment);
    println!(
        "  ({}, {}) to ({}, {}): {} pixels",
        segment.p1.x,
        segment.p1.y,
        segment.p2.x,
        segment.p2.y,
        pixels.len()
    );
    canvas.plot(&pixels, colors::WHITE);

    save(&canvas, Demo::DdaLine.name())
}

fn run_bresenham_line() -> Result<(), String> {
    println!("Bresenham Line Drawing Algorithm");

    let mut canvas = Canvas::new(WINDOW_WIDTH, WINDOW_HEIGHT);

    // Shallow slope iterates x, steep slope iterates y
    let cases = [
        ("shallow", Pixel::new(100, 200), Pixel::new(700, 400), colors::WHITE),
        ("steep", Pixel::new(200, 100), Pixel::new(400, 500), colors::CYAN),
    ];

    for (label, p1, p2, color) in cases {
        let pixels = bresenham_line(p1, p2);
        println!(
            "  {} line ({}, {}) to ({}, {}): {} pixels",
            label, p1.x, p1.y, p2.x, p2.y,
            pixels.len()
        );
        canvas.plot(&pixels, color);
    }

    save(&canvas, Demo::BresenhamLine.name())
}

fn run_midpoint_circle() -> Result<(), String> {
    println!("Midpoint Circle Drawing Algorithm");

    let mut canvas = Canvas::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let center = Pixel::new(400, 300);
    let radius = 150;

    let pixels = midpoint_circle(center, radius);
    println!(
        "  center ({}, {}), radius {}: {} pixels",
        center.x, center.y, radius,
        pixels.len()
    );
    canvas.plot(&pixels, colors::WHITE);

    // Center point and a radius line for reference
    canvas.set_pixel(center.x, center.y, colors::RED);
    canvas.plot(
        &bresenham_line(center, Pixel::new(center.x + radius, center.y)),
        colors::GREEN,
    );

    save(&canvas, Demo::MidpointCircle.name())
}

fn run_midpoint_ellipse() -> Result<(), String> {
    println!("Midpoint Ellipse Drawing Algorithm");

    let mut canvas = Canvas::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let center = Pixel::new(400, 300);
    let (rx, ry) = (200, 120);

    // Axes through the center for reference
    canvas.plot(
        &bresenham_line(Pixel::new(0, center.y), Pixel::new(WINDOW_WIDTH as i32 - 1, center.y)),
        colors::GRID,
    );
    canvas.plot(
        &bresenham_line(Pixel::new(center.x, 0), Pixel::new(center.x, WINDOW_HEIGHT as i32 - 1)),
        colors::GRID,
    );

    let pixels = midpoint_ellipse(center, rx, ry);
    println!(
        "  center ({}, {}), rx {}, ry {}: {} pixels",
        center.x, center.y, rx, ry,
        pixels.len()
    );
    canvas.plot(&pixels, colors::WHITE);
    canvas.set_pixel(center.x, center.y, colors::GREEN);

    save(&canvas, Demo::MidpointEllipse.name())
}

fn run_line_clip() -> Result<(), String> {
    println!("Line Clipping: Cohen-Sutherland vs Liang-Barsky");

    let mut canvas = Canvas::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let viewport = Viewport::new(-1.0, -1.0, 1.0, 1.0, WINDOW_WIDTH, WINDOW_HEIGHT);
    let window = ClipWindow::new(-0.5, -0.5, 0.5, 0.5).map_err(|e| e.to_string())?;

    // Clipping window outline
    let corner_min = viewport.to_screen(Vec2::new(window.x_min, window.y_max));
    let corner_max = viewport.to_screen(Vec2::new(window.x_max, window.y_min));
    canvas.draw_rect_outline(
        corner_min.x,
        corner_min.y,
        corner_max.x - corner_min.x + 1,
        corner_max.y - corner_min.y + 1,
        colors::WHITE,
    );

    // Inside, entering, crossing, and fully outside test segments
    let segments = [
        Segment::new(Vec2::new(-0.3, -0.2), Vec2::new(0.2, 0.3)),
        Segment::new(Vec2::new(-0.7, -0.3), Vec2::new(0.2, 0.1)),
        Segment::new(Vec2::new(-0.1, -0.7), Vec2::new(0.3, 0.7)),
        Segment::new(Vec2::new(0.55, 0.55), Vec2::new(0.9, 0.9)),
    ];

    for (i, &segment) in segments.iter().enumerate() {
        draw_segment(&mut canvas, &viewport, segment, colors::RED);

        let outcode = clip_segment(LineClipAlgorithm::CohenSutherland, segment, &window);
        let parametric = clip_segment(LineClipAlgorithm::LiangBarsky, segment, &window);
        assert_eq!(outcode.is_some(), parametric.is_some());

        match parametric {
            Some(clipped) => {
                println!(
                    "  line {}: accepted, ({:.3}, {:.3}) to ({:.3}, {:.3})",
                    i + 1,
                    clipped.p1.x,
                    clipped.p1.y,
                    clipped.p2.x,
                    clipped.p2.y
                );
                draw_segment(&mut canvas, &viewport, clipped, colors::GREEN);
            }
            None => println!("  line {}: rejected (outside window)", i + 1),
        }
    }

    save(&canvas, Demo::LineClip.name())
}

fn run_polygon_clip() -> Result<(), String> {
    println!("Sutherland-Hodgman Polygon Clipping");

    let mut canvas = Canvas::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let viewport = Viewport::new(-400.0, -300.0, 400.0, 300.0, WINDOW_WIDTH, WINDOW_HEIGHT);

    let subject = Polygon::new(vec![
        Vec2::new(-200.0, -100.0),
        Vec2::new(100.0, -150.0),
        Vec2::new(200.0, 50.0),
        Vec2::new(50.0, 200.0),
        Vec2::new(-150.0, 150.0),
    ])
    .map_err(|e| e.to_string())?;

    let clip = Polygon::new(vec![
        Vec2::new(-180.0, -160.0),
        Vec2::new(180.0, -160.0),
        Vec2::new(180.0, 160.0),
        Vec2::new(-180.0, 160.0),
    ])
    .map_err(|e| e.to_string())?;

    let clipped = sutherland_hodgman_clip(&subject, &clip);
    println!("  subject vertices: {}", subject.len());
    println!("  clipped vertices: {}", clipped.len());

    draw_polygon_outline(&mut canvas, &viewport, clip.vertices(), colors::YELLOW);
    draw_polygon_outline(&mut canvas, &viewport, subject.vertices(), colors::CYAN);
    draw_polygon_outline(&mut canvas, &viewport, &clipped, colors::GREEN);

    save(&canvas, Demo::PolygonClip.name())
}

fn run_composite_2d() -> Result<(), String> {
    println!("Composite 2D Transformations");

    let mut canvas = Canvas::new(WINDOW_WIDTH, WINDOW_HEIGHT);
    let viewport = Viewport::new(-1.0, -1.0, 1.0, 1.0, WINDOW_WIDTH, WINDOW_HEIGHT);

    let triangle = [
        Vec2::new(-0.15, -0.1),
        Vec2::new(0.15, -0.1),
        Vec2::new(0.0, 0.2),
    ];

    draw_polygon_outline(&mut canvas, &viewport, &triangle, colors::WHITE);

    // Scale, then rotate, then translate - composed right-to-left
    let mut transform = Transform2d::new();
    transform
        .set_position_xy(0.4, 0.3)
        .set_rotation(30f32.to_radians())
        .set_scale_uniform(1.5);

    let composite: Vec<Vec2> = triangle.iter().map(|&v| transform.apply(v)).collect();
    println!("  translate(0.4, 0.3) * rotate(30 deg) * scale(1.5)");
    draw_polygon_outline(&mut canvas, &viewport, &composite, colors::CYAN);

    // Shear and reflection as single matrices
    let shear = Mat3::shearing(0.8, 0.0);
    let sheared: Vec<Vec2> = triangle.iter().map(|&v| shear * v).collect();
    println!("  shear(shx = 0.8)");
    draw_polygon_outline(&mut canvas, &viewport, &sheared, colors::MAGENTA);

    let reflect = Mat3::reflection_y() * Mat3::translation(0.4, -0.4);
    let reflected: Vec<Vec2> = triangle.iter().map(|&v| reflect * v).collect();
    println!("  reflect-y * translate(0.4, -0.4)");
    draw_polygon_outline(&mut canvas, &viewport, &reflected, colors::YELLOW);

    save(&canvas, Demo::Composite2d.name())
}

fn main() -> Result<(), String> {
    let args: Vec<String> = std::env::args().skip(1).collect();

    match args.first().map(String::as_str) {
        None => {
            for demo in Demo::ALL {
                demo.run()?;
            }
            Ok(())
        }
        Some(name) => match Demo::from_name(name) {
            Some(demo) => demo.run(),
            None => {
                let names: Vec<&str> = Demo::ALL.iter().map(|d| d.name()).collect();
                Err(format!(
                    "unknown demo '{name}'; available: {}",
                    names.join(", ")
                ))
            }
        },
    }
}
