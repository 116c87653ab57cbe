//! Per-element transform channels.
//!
//! Several effects move the same element (a project card is revealed, lifted
//! on hover and tilted under the pointer). Each effect owns one channel and
//! the element's `transform` is always the composition of all channels in a
//! fixed order.

use fnv::FnvHashMap;
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Channel {
    Reveal,
    Magnetic,
    Hover,
    Focus,
    Tilt,
}

impl Channel {
    /// Composition order, outermost first.
    pub const ORDER: [Channel; 5] = [
        Channel::Reveal,
        Channel::Magnetic,
        Channel::Hover,
        Channel::Focus,
        Channel::Tilt,
    ];
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Transform {
    Translate { x: f64, y: f64 },
    Scale(f64),
    Lift { y: f64, scale: f64 },
    Tilt { rotate_x: f64, rotate_y: f64, perspective: f64 },
}

impl Transform {
    pub fn is_identity(&self) -> bool {
        match *self {
            Transform::Translate { x, y } => x == 0.0 && y == 0.0,
            Transform::Scale(s) => s == 1.0,
            Transform::Lift { y, scale } => y == 0.0 && scale == 1.0,
            Transform::Tilt {
                rotate_x, rotate_y, ..
            } => rotate_x == 0.0 && rotate_y == 0.0,
        }
    }

    fn write_css(&self, out: &mut String) {
        // Writing into a String cannot fail.
        let _ = match *self {
            Transform::Translate { x, y } => write!(out, "translate({x}px, {y}px)"),
            Transform::Scale(s) => write!(out, "scale({s})"),
            Transform::Lift { y, scale } => write!(out, "translateY({y}px) scale({scale})"),
            Transform::Tilt {
                rotate_x,
                rotate_y,
                perspective,
            } => write!(
                out,
                "perspective({perspective}px) rotateX({rotate_x}deg) rotateY({rotate_y}deg)"
            ),
        };
    }
}

#[derive(Clone, Debug, Default)]
pub struct TransformStack {
    channels: FnvHashMap<Channel, Transform>,
}

impl TransformStack {
    pub fn set(&mut self, channel: Channel, transform: Transform) {
        self.channels.insert(channel, transform);
    }

    pub fn clear(&mut self, channel: Channel) {
        self.channels.remove(&channel);
    }

    /// CSS `transform` value; `none` when every channel is identity.
    pub fn compose(&self) -> String {
        let mut out = String::new();
        for t in Channel::ORDER
            .iter()
            .filter_map(|c| self.channels.get(c))
            .filter(|t| !t.is_identity())
        {
            if !out.is_empty() {
                out.push(' ');
            }
            t.write_css(&mut out);
        }
        if out.is_empty() {
            out.push_str("none");
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_stack_is_none() {
        assert_eq!(TransformStack::default().compose(), "none");
    }

    #[test]
    fn channels_compose_in_fixed_order_regardless_of_write_order() {
        let mut s = TransformStack::default();
        s.set(
            Channel::Tilt,
            Transform::Tilt {
                rotate_x: 2.0,
                rotate_y: -3.0,
                perspective: 1000.0,
            },
        );
        s.set(Channel::Reveal, Transform::Translate { x: 0.0, y: 20.0 });
        assert_eq!(
            s.compose(),
            "translate(0px, 20px) perspective(1000px) rotateX(2deg) rotateY(-3deg)"
        );
    }

    #[test]
    fn one_channel_does_not_clobber_another() {
        let mut s = TransformStack::default();
        s.set(
            Channel::Hover,
            Transform::Lift {
                y: -12.0,
                scale: 1.02,
            },
        );
        s.set(Channel::Reveal, Transform::Translate { x: 0.0, y: 0.0 });
        assert_eq!(s.compose(), "translateY(-12px) scale(1.02)");
        s.clear(Channel::Hover);
        assert_eq!(s.compose(), "none");
    }
}
