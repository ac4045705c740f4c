use super::models::{
    TimeData,
    TimeInterval,
};

/// Frame rate the groups export their clip at.
pub const FRAMES_PER_SECOND: f64 = 24.0;

/// Formats an offset in seconds as `m:ss`. Seconds are truncated, not rounded.
pub fn to_time(seconds: f64) -> String {
    let seconds = seconds.max(0.0);
    let minutes = (seconds / 60.0).floor() as u64;
    let remainder = (seconds % 60.0).trunc() as u64;
    format!("{}:{:02}", minutes, remainder)
}

/// A stretch of the music track with its own downloadable clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub position: usize,
    pub start: f64,
    pub end: f64,
}

impl Segment {
    pub fn from_interval(interval: &TimeInterval) -> Self {
        Self { position: interval.position, start: interval.start, end: interval.end }
    }
}

/// Intro or outro card of the track, which belongs to no group.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bookend {
    pub title: &'static str,
    pub segment: Segment,
}

/// The outro clip is numbered right after the last group.
pub fn bookend_segments(time: &TimeData, group_count: usize) -> [Bookend; 2] {
    let outro_start = time.intro_duration + time.group_interval_duration * group_count as f64;
    [
        Bookend {
            title: "Intro",
            segment: Segment { position: 0, start: 0.0, end: time.intro_duration },
        },
        Bookend {
            title: "Outro",
            segment: Segment {
                position: group_count + 1,
                start: outro_start,
                end: time.music_duration,
            },
        },
    ]
}

pub fn frame_count(time: &TimeData) -> u64 {
    (time.group_interval_duration * FRAMES_PER_SECOND).round() as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn time_data() -> TimeData {
        TimeData { intro_duration: 12.0, group_interval_duration: 15.0, music_duration: 190.5 }
    }

    #[test]
    fn test_to_time() {
        assert_eq!(to_time(0.0), "0:00");
        assert_eq!(to_time(65.0), "1:05");
        assert_eq!(to_time(125.7), "2:05");
        assert_eq!(to_time(59.9), "0:59");
        assert_eq!(to_time(600.0), "10:00");
    }

    #[test]
    fn test_bookend_segments() {
        let [intro, outro] = bookend_segments(&time_data(), 10);
        assert_eq!(intro.title, "Intro");
        assert_eq!(outro.title, "Outro");

        let (intro, outro) = (intro.segment, outro.segment);
        assert_eq!(intro.position, 0);
        assert_eq!(intro.start, 0.0);
        assert_eq!(intro.end, 12.0);
        assert_eq!(outro.position, 11);
        assert_eq!(outro.start, 162.0);
        assert_eq!(outro.end, 190.5);
    }

    #[test]
    fn test_bookend_segments_without_groups() {
        let [intro, outro] = bookend_segments(&time_data(), 0);
        let (intro, outro) = (intro.segment, outro.segment);
        assert_eq!(outro.position, 1);
        assert_eq!(outro.start, intro.end);
    }

    #[test]
    fn test_segment_from_interval() {
        let segment =
            Segment::from_interval(&TimeInterval { position: 3, start: 42.0, end: 57.0 });
        assert_eq!(segment.position, 3);
        assert_eq!(to_time(segment.start), "0:42");
        assert_eq!(to_time(segment.end), "0:57");
    }

    #[test]
    fn test_frame_count() {
        assert_eq!(frame_count(&time_data()), 360);
    }
}
