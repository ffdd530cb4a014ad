#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedStrategy {
    /// 四隅のみ
    #[default]
    Corners,
    /// 四隅 + 各辺の中点
    CornersAndEdgeMidpoints,
}

impl SeedStrategy {
    /// Seed points in fill order. Empty for a zero-sized image; duplicates
    /// (e.g. every corner of a 1x1 image) are kept.
    pub fn points(&self, width: u32, height: u32) -> Vec<(u32, u32)> {
        if width == 0 || height == 0 {
            return Vec::new();
        }
        let (right, bottom) = (width - 1, height - 1);

        let mut points = vec![(0, 0), (right, 0), (0, bottom), (right, bottom)];
        if *self == SeedStrategy::CornersAndEdgeMidpoints {
            let (mid_x, mid_y) = (width / 2, height / 2);
            points.extend([(mid_x, 0), (mid_x, bottom), (0, mid_y), (right, mid_y)]);
        }
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_corner_order() {
        assert_eq!(
            SeedStrategy::Corners.points(10, 4),
            vec![(0, 0), (9, 0), (0, 3), (9, 3)]
        );
    }

    #[test]
    fn test_edge_midpoints_follow_corners() {
        let points = SeedStrategy::CornersAndEdgeMidpoints.points(10, 5);
        assert_eq!(points.len(), 8);
        assert_eq!(&points[4..], &[(5, 0), (5, 4), (0, 2), (9, 2)]);
    }

    #[test]
    fn test_degenerate_sizes() {
        assert!(SeedStrategy::Corners.points(0, 7).is_empty());
        assert!(SeedStrategy::CornersAndEdgeMidpoints.points(7, 0).is_empty());
        assert_eq!(SeedStrategy::Corners.points(1, 1), vec![(0, 0); 4]);
    }
}
