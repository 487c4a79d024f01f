//! Skill category icons and radar chart geometry.

use std::f64::consts::{FRAC_PI_2, TAU};

use crate::content::SkillLevel;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillIcon {
    Code,
    Server,
    Shield,
    Users,
}

impl SkillIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            SkillIcon::Code => "💻",
            SkillIcon::Server => "🖥️",
            SkillIcon::Shield => "🛡️",
            SkillIcon::Users => "👥",
        }
    }

    pub fn accent(self) -> &'static str {
        match self {
            SkillIcon::Code => "text-brand-orange",
            SkillIcon::Server => "text-blue-500",
            SkillIcon::Shield => "text-green-500",
            SkillIcon::Users => "text-purple-500",
        }
    }
}

static ICON_KEYWORDS: [(&str, SkillIcon); 6] = [
    ("Languages", SkillIcon::Code),
    ("Linguagens", SkillIcon::Code),
    ("Architecture", SkillIcon::Server),
    ("Arquitetura", SkillIcon::Server),
    ("Quality", SkillIcon::Shield),
    ("Qualidade", SkillIcon::Shield),
];

/// First keyword contained in `title` wins; unknown titles get [`SkillIcon::Users`].
pub fn icon_for(title: &str) -> SkillIcon {
    ICON_KEYWORDS
        .iter()
        .find(|(keyword, _)| title.contains(keyword))
        .map(|(_, icon)| *icon)
        .unwrap_or(SkillIcon::Users)
}

/// Screen reader description of the chart, e.g. `"<prefix> Architecture, QA"`.
pub fn chart_description(prefix: &str, levels: &[SkillLevel]) -> String {
    let subjects = levels
        .iter()
        .map(|l| l.subject)
        .collect::<Vec<_>>()
        .join(", ");
    format!("{prefix} {subjects}")
}

/// Layout of a radar chart inside a square SVG viewbox.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarGeometry {
    pub center: f64,
    pub radius: f64,
}

impl RadarGeometry {
    pub fn new(size: f64) -> Self {
        // 70% outer radius leaves room for axis labels
        Self {
            center: size / 2.0,
            radius: size / 2.0 * 0.7,
        }
    }

    /// Point on axis `index` of `axes` at `fraction` of the full radius. Axis 0
    /// points straight up, the rest follow clockwise.
    pub fn point(&self, index: usize, axes: usize, fraction: f64) -> (f64, f64) {
        let angle = TAU * index as f64 / axes.max(1) as f64 - FRAC_PI_2;
        let r = self.radius * fraction;
        (self.center + r * angle.cos(), self.center + r * angle.sin())
    }

    pub fn data_points(&self, levels: &[SkillLevel]) -> Vec<(f64, f64)> {
        levels
            .iter()
            .enumerate()
            .map(|(i, l)| self.point(i, levels.len(), f64::from(l.level.min(100)) / 100.0))
            .collect()
    }

    /// Concentric grid polygons at each `rings` step.
    pub fn grid(&self, axes: usize, rings: usize) -> Vec<Vec<(f64, f64)>> {
        (1..=rings)
            .map(|ring| {
                let fraction = ring as f64 / rings as f64;
                (0..axes).map(|i| self.point(i, axes, fraction)).collect()
            })
            .collect()
    }
}

/// Formats points for an SVG `points` attribute.
pub fn svg_points(points: &[(f64, f64)]) -> String {
    points
        .iter()
        .map(|(x, y)| format!("{x:.2},{y:.2}"))
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::{DATA_EN, DATA_PT};

    fn close(a: (f64, f64), b: (f64, f64)) -> bool {
        (a.0 - b.0).abs() < 1e-9 && (a.1 - b.1).abs() < 1e-9
    }

    #[test]
    fn test_icon_keywords_in_both_languages() {
        assert_eq!(icon_for("Languages & Frameworks"), SkillIcon::Code);
        assert_eq!(icon_for("Linguagens & Frameworks"), SkillIcon::Code);
        assert_eq!(icon_for("Architecture & Infrastructure"), SkillIcon::Server);
        assert_eq!(icon_for("Arquitetura"), SkillIcon::Server);
        assert_eq!(icon_for("Quality & Testing"), SkillIcon::Shield);
        assert_eq!(icon_for("Qualidade & Testes"), SkillIcon::Shield);
    }

    #[test]
    fn test_unknown_title_falls_back() {
        assert_eq!(icon_for("People & Product"), SkillIcon::Users);
        assert_eq!(icon_for(""), SkillIcon::Users);
        // matching is case sensitive
        assert_eq!(icon_for("languages"), SkillIcon::Users);
    }

    #[test]
    fn test_catalog_icons_agree_across_languages() {
        let pt = DATA_PT.skill_categories.iter().map(|c| icon_for(c.title));
        let en = DATA_EN.skill_categories.iter().map(|c| icon_for(c.title));
        assert!(pt.eq(en));
    }

    #[test]
    fn test_chart_description() {
        let levels = [
            SkillLevel { subject: "QA", level: 90 },
            SkillLevel { subject: "UI/UX", level: 80 },
        ];
        assert_eq!(chart_description("Skills:", &levels), "Skills: QA, UI/UX");
    }

    #[test]
    fn test_radar_points() {
        let geometry = RadarGeometry::new(200.0);
        assert_eq!(geometry.center, 100.0);
        assert!((geometry.radius - 70.0).abs() < 1e-9);

        // first axis points up
        assert!(close(geometry.point(0, 4, 1.0), (100.0, 30.0)));
        // quarter turn clockwise
        assert!(close(geometry.point(1, 4, 1.0), (170.0, 100.0)));
        assert!(close(geometry.point(2, 4, 0.5), (100.0, 135.0)));
        assert!(close(geometry.point(3, 4, 0.0), (100.0, 100.0)));
    }

    #[test]
    fn test_data_points_scale_with_level() {
        let geometry = RadarGeometry::new(100.0);
        let levels = [
            SkillLevel { subject: "A", level: 100 },
            SkillLevel { subject: "B", level: 50 },
        ];
        let points = geometry.data_points(&levels);
        assert_eq!(points.len(), 2);
        assert!(close(points[0], (50.0, 15.0)));
        assert!(close(points[1], (50.0, 67.5)));
    }

    #[test]
    fn test_grid_rings() {
        let grid = RadarGeometry::new(100.0).grid(8, 4);
        assert_eq!(grid.len(), 4);
        assert!(grid.iter().all(|ring| ring.len() == 8));
    }

    #[test]
    fn test_svg_points() {
        assert_eq!(svg_points(&[(1.0, 2.5), (3.333, 4.0)]), "1.00,2.50 3.33,4.00");
        assert_eq!(svg_points(&[]), "");
    }
}
