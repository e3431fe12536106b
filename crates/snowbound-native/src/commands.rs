// Line commands for the audition binary.
// Self-contained so host tests can include this file.

use glam::Vec2;
use snowbound_core::ChapterId;

#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Show(ChapterId),
    Scratch,
    Pins(Vec<usize>),
    Cut,
    Reset,
    Help,
    Quit,
}

pub const HELP: &str = "commands: show <1-4> | scratch | pins <i...> | cut | reset | help | quit";

pub fn parse_command(line: &str) -> anyhow::Result<Option<Command>> {
    let mut words = line.split_whitespace();
    let Some(head) = words.next() else {
        return Ok(None);
    };
    let cmd = match head.to_ascii_lowercase().as_str() {
        "show" => {
            let n: usize = words
                .next()
                .ok_or_else(|| anyhow::anyhow!("show needs a chapter number"))?
                .parse()?;
            let chapter = n
                .checked_sub(1)
                .and_then(ChapterId::from_index)
                .ok_or_else(|| anyhow::anyhow!("no chapter {}", n))?;
            Command::Show(chapter)
        }
        "scratch" => Command::Scratch,
        "pins" => {
            let pins = words
                .map(|w| w.parse::<usize>())
                .collect::<Result<Vec<_>, _>>()?;
            if pins.is_empty() {
                anyhow::bail!("pins needs at least one index");
            }
            Command::Pins(pins)
        }
        "cut" => Command::Cut,
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" | "q" => Command::Quit,
        other => anyhow::bail!("unknown command '{}'", other),
    };
    Ok(Some(cmd))
}

/// Back-and-forth strokes covering a `width` x `height` surface.
pub fn scratch_sweep(width: u32, height: u32, brush_radius: f32) -> Vec<Vec2> {
    let (w, h) = (width as f32, height as f32);
    let step = brush_radius.max(1.0);
    let mut points = Vec::new();
    let mut y = 0.0;
    let mut rightward = true;
    while y <= h {
        let (from, to) = if rightward { (0.0, w) } else { (w, 0.0) };
        let mut t = 0.0;
        while t <= 1.0 {
            points.push(Vec2::new(from + (to - from) * t, y));
            t += step / w.max(step);
        }
        rightward = !rightward;
        y += step;
    }
    points
}

/// Arc over the heart from its left to its right edge.
pub fn cut_arc() -> Vec<Vec2> {
    // quadratic bezier (20,100) -> (100,20) -> (180,100), sampled
    let (p0, p1, p2) = (Vec2::new(20.0, 100.0), Vec2::new(100.0, 20.0), Vec2::new(180.0, 100.0));
    (0..=20)
        .map(|i| {
            let t = i as f32 / 20.0;
            let u = 1.0 - t;
            p0 * (u * u) + p1 * (2.0 * u * t) + p2 * (t * t)
        })
        .collect()
}
