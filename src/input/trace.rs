//! Recorded input traces.
//!
//! A trace is JSON Lines: one [`InputEvent`] per line plus the frame it
//! arrived before. Blank lines and lines starting with `#` are skipped.
//!
//! ```text
//! {"frame": 0, "type": "orientation", "alpha": 10.0, "beta": 45.0}
//! {"frame": 4, "type": "wheel", "delta_y": 120.0}
//! ```

use serde::{Deserialize, Serialize};

use super::event::InputEvent;
use crate::camera::{CameraPose, OrbitController};
use crate::error::ArcamError;

/// Highest frame index a trace may name (about three days at 60 fps).
pub const MAX_TRACE_FRAME: u64 = 1 << 24;

/// One recorded event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TraceRecord {
    /// Frame index the event is delivered before.
    #[serde(default)]
    pub frame: u64,
    /// The event itself.
    #[serde(flatten)]
    pub event: InputEvent,
}

/// Parse a JSON Lines trace.
///
/// Records must be in non-decreasing frame order and name no frame past
/// [`MAX_TRACE_FRAME`].
pub fn parse_trace(content: &str) -> Result<Vec<TraceRecord>, ArcamError> {
    let mut records: Vec<TraceRecord> = Vec::new();
    for (index, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let parse_error = |message: String| ArcamError::TraceParse { line: index + 1, message };
        let record: TraceRecord =
            serde_json::from_str(line).map_err(|e| parse_error(e.to_string()))?;
        if record.frame > MAX_TRACE_FRAME {
            return Err(parse_error(format!(
                "frame {} is past the last replayable frame {MAX_TRACE_FRAME}",
                record.frame
            )));
        }
        if let Some(last) = records.last() {
            if record.frame < last.frame {
                return Err(parse_error(format!(
                    "frame {} comes after frame {}",
                    record.frame, last.frame
                )));
            }
        }
        records.push(record);
    }
    Ok(records)
}

/// Feed `records` into `controller`, resolving one pose per frame through
/// the last recorded frame. Returns every resolved pose in order.
///
/// Records are delivered by frame; events sharing a frame keep their
/// order. Records past [`MAX_TRACE_FRAME`] are dropped.
pub fn replay(controller: &mut OrbitController, records: &[TraceRecord]) -> Vec<CameraPose> {
    let mut ordered: Vec<&TraceRecord> = records
        .iter()
        .filter(|r| {
            let keep = r.frame <= MAX_TRACE_FRAME;
            if !keep {
                log::warn!("dropping event at frame {} past {MAX_TRACE_FRAME}", r.frame);
            }
            keep
        })
        .collect();
    ordered.sort_by_key(|r| r.frame);

    let Some(last) = ordered.last().map(|r| r.frame) else {
        return Vec::new();
    };
    let mut poses = Vec::with_capacity(usize::try_from(last).map_or(0, |n| n.saturating_add(1)));
    let mut pending = ordered.into_iter().peekable();
    for frame in 0..=last {
        while let Some(record) = pending.next_if(|r| r.frame == frame) {
            controller.handle_input(record.event);
        }
        let pose = controller.resolve_pose();
        log::debug!(
            "frame {frame}: eye ({:.3}, {:.3}, {:.3})",
            pose.eye.x,
            pose.eye.y,
            pose.eye.z
        );
        poses.push(pose);
    }
    poses
}
