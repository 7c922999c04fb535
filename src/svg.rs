use crate::core::constants::{DIVIDER_DEPTH_TICKS, DIVIDER_SONAR_RINGS, HERO_RINGS};
use crate::core::radar::{resolved_angle, Gauge, RadarGeometry, SkillDatum};
use crate::core::showcase::{
    depth_tick_is_major, hero_ring_scale, reveal_delay, rising_bubbles, signal_wave_path,
    sonar_ring_diameter, Backdrop, DividerKind, Glyph, MissionEntry, Project,
};
use crate::core::tactical::{MapGeometry, SonarContact};
use glam::Vec2;
use rand::Rng;
use std::fmt::Write;

// SVG markup builders. Output is injected with `set_inner_html`, so every
// piece of text that came from authored data goes through `escape`.

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

/// Spider chart: reference rings, spokes, the magnitude polygon, vertex dots
/// and labels.
pub fn radar_chart(skills: &[SkillDatum], geo: &RadarGeometry) -> String {
    let c = geo.center;
    let mut svg = String::new();
    _ = write!(
        svg,
        r#"<svg class="radar-chart" width="100%" height="100%" viewBox="0 0 {s} {s}">"#,
        s = geo.size
    );
    for r in geo.ring_radii() {
        _ = write!(
            svg,
            r#"<circle class="radar-ring" cx="{:.2}" cy="{:.2}" r="{:.2}" fill="none"/>"#,
            c.x, c.y, r
        );
    }
    for i in 0..skills.len() {
        let end = geo.spoke_end(resolved_angle(skills, i));
        _ = write!(
            svg,
            r#"<line class="radar-spoke" x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}"/>"#,
            c.x, c.y, end.x, end.y
        );
    }
    _ = write!(
        svg,
        r#"<polygon class="radar-area" points="{}"/>"#,
        geo.polygon_points_attr(skills)
    );
    for p in geo.polygon(skills) {
        _ = write!(
            svg,
            r#"<circle class="radar-dot" cx="{:.2}" cy="{:.2}" r="3"/>"#,
            p.x, p.y
        );
    }
    for (i, s) in skills.iter().enumerate() {
        let l = geo.label_pos(resolved_angle(skills, i));
        _ = write!(
            svg,
            r#"<text class="radar-label" x="{:.2}" y="{:.2}" text-anchor="middle" dominant-baseline="middle">{}</text>"#,
            l.x,
            l.y,
            escape(s.name)
        );
    }
    svg.push_str("</svg>");
    svg
}

/// Horizontal bar list shown next to the radar chart.
pub fn skill_bars(skills: &[SkillDatum]) -> String {
    let mut html = String::new();
    for s in skills {
        _ = write!(
            html,
            r#"<div class="skill-bar"><div class="skill-bar-head"><span>{}</span><span>{}%</span></div><div class="skill-bar-track"><div class="skill-bar-fill" style="width:{:.1}%"></div></div></div>"#,
            escape(s.name),
            s.percent(),
            s.magnitude * 100.0
        );
    }
    html
}

/// Circular gauge card for one skill.
pub fn gauge_card(skill: &SkillDatum, gauge: &Gauge) -> String {
    let size = (gauge.radius + 8.0) * 2.0;
    let c = size / 2.0;
    let circ = gauge.circumference();
    let status = skill.status();
    format!(
        concat!(
            r#"<div class="gauge-card">"#,
            r#"<div class="gauge-head"><span>{name}</span><span class="gauge-value">{pct}</span></div>"#,
            r#"<svg width="{size}" height="{size}" viewBox="0 0 {size} {size}">"#,
            r#"<circle class="gauge-track" cx="{c}" cy="{c}" r="{r}" fill="none" stroke-width="3"/>"#,
            r#"<circle class="gauge-fill" cx="{c}" cy="{c}" r="{r}" fill="none" stroke-width="3" stroke-linecap="round" stroke-dasharray="{circ:.3}" stroke-dashoffset="{offset:.3}" transform="rotate(-90 {c} {c})"/>"#,
            r#"<text x="{c}" y="{ty}" text-anchor="middle" dominant-baseline="middle">{pct}%</text>"#,
            r#"</svg>"#,
            r#"<div class="gauge-status {class}">{label}</div>"#,
            r#"</div>"#
        ),
        name = escape(skill.name),
        pct = skill.percent(),
        size = size,
        c = c,
        r = gauge.radius,
        circ = circ,
        offset = gauge.dash_offset(skill.magnitude),
        ty = c + 2.0,
        class = status.css_class(),
        label = status.label(),
    )
}

pub fn gauge_grid(skills: &[SkillDatum], gauge: &Gauge) -> String {
    skills.iter().map(|s| gauge_card(s, gauge)).collect()
}

/// Static layer of the tactical map. The sweep elements carry ids so the
/// frame loop can move them without rebuilding the markup.
pub fn tactical_map(geo: &MapGeometry, waypoints: &[Vec2], contacts: &[SonarContact]) -> String {
    let c = geo.center;
    let mut svg = String::new();
    _ = write!(
        svg,
        r#"<svg class="tactical-map" width="100%" height="100%" viewBox="0 0 {s} {s}">"#,
        s = geo.size
    );
    for i in 1..10 {
        let pos = i as f32 / 10.0 * geo.size;
        _ = write!(
            svg,
            r#"<line class="map-grid" x1="{p:.1}" y1="0" x2="{p:.1}" y2="{s}"/><line class="map-grid" x1="0" y1="{p:.1}" x2="{s}" y2="{p:.1}"/>"#,
            p = pos,
            s = geo.size
        );
    }
    for scale in [0.25, 0.5, 0.75, 1.0] {
        _ = write!(
            svg,
            r#"<circle class="map-ring" cx="{:.1}" cy="{:.1}" r="{:.1}" fill="none"/>"#,
            c.x,
            c.y,
            geo.max_r * scale
        );
    }
    let tip = geo.sweep_tip(0.0);
    _ = write!(
        svg,
        r#"<path id="sweep-wedge" class="map-sweep-wedge" d="{}"/><line id="sweep-line" class="map-sweep-line" x1="{:.1}" y1="{:.1}" x2="{:.1}" y2="{:.1}"/>"#,
        geo.sweep_wedge_path(0.0),
        c.x,
        c.y,
        tip.x,
        tip.y
    );
    _ = write!(
        svg,
        r#"<path class="map-route" d="{}" fill="none"/>"#,
        geo.route_path(waypoints)
    );
    for wp in waypoints {
        let p = geo.to_map(*wp);
        _ = write!(
            svg,
            r#"<circle class="map-waypoint" cx="{:.1}" cy="{:.1}" r="3"/>"#,
            p.x, p.y
        );
    }
    for contact in contacts {
        let p = geo.to_map(contact.pos);
        _ = write!(
            svg,
            r#"<g class="map-contact {}"><circle cx="{:.1}" cy="{:.1}" r="4"/><text x="{:.1}" y="{:.1}">{}</text></g>"#,
            contact.kind.css_class(),
            p.x,
            p.y,
            p.x + 8.0,
            p.y - 8.0,
            escape(contact.label)
        );
    }
    svg.push_str("</svg>");
    svg
}

pub fn glyph(g: Glyph, size: u32) -> String {
    format!(
        r#"<svg class="glyph" width="{s}" height="{s}" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round"><path d="{d}"/></svg>"#,
        s = size,
        d = g.path()
    )
}

/// Experience timeline: a vertical rail with one node and card per entry.
pub fn mission_timeline(entries: &[MissionEntry]) -> String {
    let mut html = String::from(r#"<div class="timeline"><div class="timeline-rail"></div>"#);
    for (i, e) in entries.iter().enumerate() {
        _ = write!(
            html,
            concat!(
                r#"<div class="timeline-entry reveal" style="--delay:{delay:.2}s">"#,
                r#"<div class="timeline-node"></div>"#,
                r#"<div class="glass-panel hud-corner">"#,
                r#"<p class="timeline-period">{period}</p>"#,
                r#"<div class="timeline-head">{glyph}<h3>{title}</h3></div>"#,
                r#"<p class="timeline-org">{org}</p>"#,
                r#"<p class="timeline-desc">{desc}</p>"#,
                r#"</div></div>"#
            ),
            delay = reveal_delay(0.2, 0.15, i),
            period = escape(e.period),
            glyph = glyph(e.glyph, 14),
            title = escape(e.title),
            org = escape(e.org),
            desc = escape(e.desc),
        );
    }
    html.push_str("</div>");
    html
}

/// Project cards. Featured projects get a wider card and a FLAGSHIP badge.
pub fn project_cards(projects: &[Project]) -> String {
    let mut html = String::from(r#"<div class="project-grid">"#);
    for (i, p) in projects.iter().enumerate() {
        let badge = if p.featured {
            r#"<span class="project-badge">FLAGSHIP</span>"#
        } else {
            ""
        };
        let tech: String = p
            .tech
            .iter()
            .map(|t| format!(r#"<span class="tech-chip">{}</span>"#, escape(t)))
            .collect();
        _ = write!(
            html,
            concat!(
                r#"<article class="project-card glass-panel hud-corner reveal{featured}" style="--delay:{delay:.2}s">"#,
                r#"<div class="project-icon">{glyph}</div>"#,
                r#"<div class="project-body">"#,
                r#"<div class="project-head"><h3>{title}</h3>{badge}</div>"#,
                r#"<p class="project-desc">{desc}</p>"#,
                r#"<div class="project-tech">{tech}</div>"#,
                r#"</div></article>"#
            ),
            featured = if p.featured { " featured" } else { "" },
            delay = reveal_delay(0.1, 0.1, i),
            glyph = glyph(p.glyph, 22),
            title = escape(p.title),
            badge = badge,
            desc = escape(p.desc),
            tech = tech,
        );
    }
    html.push_str("</div>");
    html
}

/// Inner markup for a `data-divider` band. Animations start when the band
/// gets the `in-view` class.
pub fn section_divider<R: Rng>(kind: DividerKind, rng: &mut R) -> String {
    let mut html = String::new();
    match kind {
        DividerKind::Sonar => {
            for i in 0..DIVIDER_SONAR_RINGS {
                _ = write!(
                    html,
                    r#"<div class="divider-ring" style="--size:{:.0}px;--delay:{:.1}s"></div>"#,
                    sonar_ring_diameter(i),
                    i as f32 * 0.3
                );
            }
            html.push_str(r#"<div class="divider-ping"></div><div class="divider-line"></div>"#);
        }
        DividerKind::Bubbles => {
            for b in rising_bubbles(rng) {
                _ = write!(
                    html,
                    r#"<div class="divider-bubble" style="left:{:.1}%;width:{:.0}px;height:{:.0}px;--delay:{:.2}s;--duration:{:.2}s;--rise:{:.1}%;--drift:{:.1}px"></div>"#,
                    b.left_percent,
                    b.size_px,
                    b.size_px,
                    b.delay_s,
                    b.duration_s,
                    b.rise_percent,
                    b.drift_px
                );
            }
            html.push_str(concat!(
                r#"<div class="divider-label-row"><div class="divider-rule"></div>"#,
                r#"<span class="divider-label">▼ DESCENDING ▼</span>"#,
                r#"<div class="divider-rule"></div></div>"#
            ));
        }
        DividerKind::Depth => {
            html.push_str(r#"<div class="divider-ticks">"#);
            for i in 0..DIVIDER_DEPTH_TICKS {
                let class = if depth_tick_is_major(i) { "tick major" } else { "tick" };
                _ = write!(
                    html,
                    r#"<div class="{}" style="--delay:{:.2}s"></div>"#,
                    class,
                    i as f32 * 0.04
                );
            }
            html.push_str(r#"</div><div class="divider-beam"></div>"#);
        }
        DividerKind::Signal => {
            _ = write!(
                html,
                concat!(
                    r#"<svg class="divider-wave" viewBox="0 0 1000 48" preserveAspectRatio="none">"#,
                    r#"<path d="{}" fill="none" pathLength="1" vector-effect="non-scaling-stroke"/></svg>"#,
                    r#"<div class="divider-label">─── SIGNAL ACQUIRED ───</div>"#
                ),
                signal_wave_path()
            );
        }
    }
    html
}

/// Fixed backdrop behind every section.
pub fn sonar_backdrop(backdrop: &Backdrop) -> String {
    let mut html = String::from(r#"<div class="backdrop-grid"></div><div class="pulse-cluster primary">"#);
    for d in &backdrop.primary_pulse_delays {
        _ = write!(html, r#"<div class="pulse-ring" style="--delay:{:.1}s"></div>"#, d);
    }
    html.push_str(r#"</div>"#);
    for s in &backdrop.specks {
        _ = write!(
            html,
            r#"<div class="speck" style="left:{:.2}%;top:{:.2}%;--delay:{:.2}s;--duration:{:.2}s"></div>"#,
            s.left_percent, s.top_percent, s.delay_s, s.duration_s
        );
    }
    for c in &backdrop.bubble_columns {
        _ = write!(
            html,
            r#"<div class="bubble-column" style="left:{:.0}%;--delay:{:.1}s;--duration:{:.0}s"></div>"#,
            c.left_percent, c.delay_s, c.duration_s
        );
    }
    html.push_str(r#"<div class="pulse-cluster accent">"#);
    for d in &backdrop.accent_pulse_delays {
        _ = write!(html, r#"<div class="pulse-ring" style="--delay:{:.1}s"></div>"#, d);
    }
    html.push_str(r#"</div><div class="backdrop-vignette"></div>"#);
    html
}

/// Concentric rings and rotating sweep arm behind the hero heading.
pub fn hero_sonar() -> String {
    let mut html = String::new();
    for i in 0..HERO_RINGS {
        _ = write!(
            html,
            r#"<div class="hero-ring" style="transform:scale({:.2})"></div>"#,
            hero_ring_scale(i)
        );
    }
    html.push_str(r#"<div class="hero-sweep"><div class="hero-sweep-arm"></div></div>"#);
    html
}
