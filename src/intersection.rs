pub mod controller;

pub use controller::{Firing, IntersectionController};

/// The two lane groups that take turns holding right-of-way.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LaneGroup {
    Horizontal,
    Vertical,
}

/// One of the four fixed traffic directions, each with its own spawn timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Lane {
    LeftHorizontal,
    RightHorizontal,
    TopVertical,
    BottomVertical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RightOfWay {
    VerticalGreen,
    HorizontalGreen,
}

impl Lane {
    pub const ALL: [Lane; 4] = [
        Lane::LeftHorizontal,
        Lane::RightHorizontal,
        Lane::TopVertical,
        Lane::BottomVertical,
    ];

    pub fn group(&self) -> LaneGroup {
        match self {
            Lane::LeftHorizontal | Lane::RightHorizontal => LaneGroup::Horizontal,
            Lane::TopVertical | Lane::BottomVertical => LaneGroup::Vertical,
        }
    }

    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl LaneGroup {
    /// Lanes of this group, in the order they receive freshly drawn intervals.
    pub fn lanes(&self) -> [Lane; 2] {
        match self {
            LaneGroup::Horizontal => [Lane::LeftHorizontal, Lane::RightHorizontal],
            LaneGroup::Vertical => [Lane::TopVertical, Lane::BottomVertical],
        }
    }

    pub fn other(&self) -> LaneGroup {
        match self {
            LaneGroup::Horizontal => LaneGroup::Vertical,
            LaneGroup::Vertical => LaneGroup::Horizontal,
        }
    }
}

impl RightOfWay {
    pub fn flipped(&self) -> RightOfWay {
        match self {
            RightOfWay::VerticalGreen => RightOfWay::HorizontalGreen,
            RightOfWay::HorizontalGreen => RightOfWay::VerticalGreen,
        }
    }

    pub fn green_group(&self) -> LaneGroup {
        match self {
            RightOfWay::VerticalGreen => LaneGroup::Vertical,
            RightOfWay::HorizontalGreen => LaneGroup::Horizontal,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_partition_the_lanes() {
        for group in [LaneGroup::Horizontal, LaneGroup::Vertical] {
            for lane in group.lanes() {
                assert_eq!(lane.group(), group);
            }
            assert_ne!(group.other(), group);
        }
        for (i, lane) in Lane::ALL.iter().enumerate() {
            assert_eq!(lane.index(), i);
        }
    }

    #[test]
    fn right_of_way_alternates() {
        let phase = RightOfWay::VerticalGreen;
        assert_eq!(phase.flipped(), RightOfWay::HorizontalGreen);
        assert_eq!(phase.flipped().flipped(), phase);
        assert_eq!(phase.flipped().green_group(), LaneGroup::Horizontal);
    }
}
