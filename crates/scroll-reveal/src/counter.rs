//! Counter Animation
//!
//! Counts a statistic up from zero to the number found in its text.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Approximate display refresh interval (60fps)
pub const FRAME_INTERVAL_MS: f64 = 16.0;

/// Default time for a counter to reach its target
pub const DEFAULT_DURATION_MS: f64 = 2000.0;

/// Number extracted from a counter's text, plus the text itself
/// so suffixes like "250+" can be put back afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct CounterTarget {
    pub value: f64,
    /// The numeric part was written with a decimal point
    pub decimal: bool,
    pub original: String,
}

impl CounterTarget {
    /// Keep only digits and '.', then read the longest leading number.
    /// Returns None when nothing numeric is left ("N/A", "", "...").
    pub fn parse(text: &str) -> Option<Self> {
        let numeric: String = text
            .chars()
            .filter(|c| c.is_ascii_digit() || *c == '.')
            .collect();
        let prefix = numeric_prefix(&numeric)?;
        let value: f64 = prefix.parse().ok()?;
        if !value.is_finite() {
            return None;
        }
        Some(Self {
            value,
            decimal: prefix.contains('.'),
            original: text.to_string(),
        })
    }
}

/// Longest prefix made of digits with at most one '.', ending on a digit
fn numeric_prefix(s: &str) -> Option<&str> {
    let mut seen_dot = false;
    let mut seen_digit = false;
    let mut end = 0;

    for (i, b) in s.bytes().enumerate() {
        if b.is_ascii_digit() {
            seen_digit = true;
            end = i + 1;
        } else if b == b'.' && !seen_dot {
            seen_dot = true;
        } else {
            break;
        }
    }

    seen_digit.then(|| &s[..end])
}

/// One rendered step of a counter
#[derive(Clone, Debug, PartialEq)]
pub enum Frame {
    /// Intermediate value, more frames follow
    Running(String),
    /// Exact target reached
    Finished(String),
}

/// Pure interpolation state, advanced once per animation frame
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: f64,
    increment: f64,
    current: f64,
    decimal: bool,
}

impl CounterAnimation {
    pub fn new(target: &CounterTarget, duration_ms: f64) -> Self {
        Self {
            target: target.value,
            increment: target.value / (duration_ms / FRAME_INTERVAL_MS),
            current: 0.0,
            decimal: target.decimal,
        }
    }

    pub fn step(&mut self) -> Frame {
        self.current += self.increment;

        if self.current < self.target {
            let text = if self.decimal {
                format!("{:.1}", self.current)
            } else {
                format!("{}", self.current.floor())
            };
            Frame::Running(text)
        } else {
            Frame::Finished(format!("{}", self.target))
        }
    }
}

/// Drive a `CounterAnimation` on `requestAnimationFrame`, writing each frame
/// into the element's text. `on_finish` runs right after the exact target is written;
/// the frame closure then frees itself.
pub fn animate_counter<F>(
    element: web_sys::Element,
    target: &CounterTarget,
    duration_ms: f64,
    on_finish: F,
) -> Result<(), JsValue>
where
    F: FnOnce() + 'static,
{
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let mut animation = CounterAnimation::new(target, duration_ms);
    let mut on_finish = Some(on_finish);

    let frame: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let next_frame = frame.clone();
    let raf_window = window.clone();

    *frame.borrow_mut() = Some(Closure::<dyn FnMut()>::new(move || {
        match animation.step() {
            Frame::Running(text) => {
                element.set_text_content(Some(&text));
                if let Some(cb) = next_frame.borrow().as_ref() {
                    let _ = raf_window.request_animation_frame(cb.as_ref().unchecked_ref());
                }
            }
            Frame::Finished(text) => {
                element.set_text_content(Some(&text));
                if let Some(f) = on_finish.take() {
                    f();
                }
                let _ = next_frame.borrow_mut().take();
            }
        }
    }));

    if let Some(cb) = frame.borrow().as_ref() {
        window.request_animation_frame(cb.as_ref().unchecked_ref())?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(target: &CounterTarget, duration_ms: f64) -> Vec<Frame> {
        let mut animation = CounterAnimation::new(target, duration_ms);
        let mut frames = Vec::new();
        loop {
            let frame = animation.step();
            let done = matches!(frame, Frame::Finished(_));
            frames.push(frame);
            if done || frames.len() > 10_000 {
                break;
            }
        }
        frames
    }

    #[test]
    fn test_parse_strips_suffix() {
        let target = CounterTarget::parse("250+").unwrap();
        assert_eq!(target.value, 250.0);
        assert!(!target.decimal);
        assert_eq!(target.original, "250+");
    }

    #[test]
    fn test_parse_decimal_and_separators() {
        let target = CounterTarget::parse("4.5k").unwrap();
        assert_eq!(target.value, 4.5);
        assert!(target.decimal);

        // Thousands separators are dropped along with the rest of the non-numeric text
        let target = CounterTarget::parse("1,200 kg").unwrap();
        assert_eq!(target.value, 1200.0);
    }

    #[test]
    fn test_parse_stops_at_second_dot() {
        let target = CounterTarget::parse("1.2.3").unwrap();
        assert_eq!(target.value, 1.2);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert!(CounterTarget::parse("N/A").is_none());
        assert!(CounterTarget::parse("").is_none());
        assert!(CounterTarget::parse("...").is_none());
    }

    #[test]
    fn test_integer_frames_are_floored() {
        let target = CounterTarget::parse("250+").unwrap();
        let frames = run(&target, DEFAULT_DURATION_MS);

        for frame in &frames[..frames.len() - 1] {
            match frame {
                Frame::Running(text) => {
                    assert!(!text.contains('.'), "unexpected fraction in {}", text);
                    let n: f64 = text.parse().unwrap();
                    assert!(n < 250.0);
                }
                Frame::Finished(_) => panic!("finished early"),
            }
        }
        assert_eq!(frames.last(), Some(&Frame::Finished("250".to_string())));
    }

    #[test]
    fn test_decimal_frames_have_one_place() {
        let target = CounterTarget::parse("4.5").unwrap();
        let frames = run(&target, DEFAULT_DURATION_MS);

        for frame in &frames[..frames.len() - 1] {
            let Frame::Running(text) = frame else { panic!("finished early") };
            let (_, fraction) = text.split_once('.').expect("decimal frame");
            assert_eq!(fraction.len(), 1);
        }
        assert_eq!(frames.last(), Some(&Frame::Finished("4.5".to_string())));
    }

    #[test]
    fn test_frame_count_matches_duration() {
        let target = CounterTarget::parse("1000").unwrap();
        let frames = run(&target, DEFAULT_DURATION_MS);
        // 2000ms / 16ms = 125 frames, the last one lands on the target
        assert_eq!(frames.len(), 125);
    }

    #[test]
    fn test_zero_target_finishes_immediately() {
        let target = CounterTarget::parse("0 trees").unwrap();
        let frames = run(&target, DEFAULT_DURATION_MS);
        assert_eq!(frames, vec![Frame::Finished("0".to_string())]);
    }
}
