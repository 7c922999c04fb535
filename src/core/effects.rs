use crate::core::constants::*;
use crate::core::scroll::ScrollProgress;
use rand::Rng;
use smallvec::SmallVec;

/// Shape of an effect's intensity inside its window.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Envelope {
    /// Full intensity anywhere inside the window.
    Flat,
    /// Rises over `ramp`, holds, then falls over `ramp` before the end.
    Trapezoid { ramp: f32 },
}

/// A named effect active over a sub-range of scroll progress.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectWindow {
    pub name: &'static str,
    pub start: f32,
    pub end: f32,
    pub envelope: Envelope,
}

pub const TORPEDO_WINDOW: EffectWindow = EffectWindow {
    name: "torpedo",
    start: TORPEDO_START,
    end: TORPEDO_END,
    envelope: Envelope::Flat,
};

pub const PERISCOPE_WINDOW: EffectWindow = EffectWindow {
    name: "periscope",
    start: PERISCOPE_START,
    end: PERISCOPE_END,
    envelope: Envelope::Trapezoid {
        ramp: PERISCOPE_RAMP,
    },
};

impl EffectWindow {
    #[inline]
    pub fn contains(&self, progress: f32) -> bool {
        progress >= self.start && progress <= self.end
    }

    /// Position inside the window mapped to \[0, 1\], or `None` outside it.
    #[inline]
    pub fn local(&self, progress: f32) -> Option<f32> {
        if !self.contains(progress) {
            return None;
        }
        let span = self.end - self.start;
        Some(((progress - self.start) / span).clamp(0.0, 1.0))
    }

    pub fn intensity(&self, progress: f32) -> f32 {
        if !self.contains(progress) {
            return 0.0;
        }
        match self.envelope {
            Envelope::Flat => 1.0,
            Envelope::Trapezoid { ramp } => {
                let rise = ((progress - self.start) / ramp).min(1.0);
                let fall = ((self.end - progress) / ramp).min(1.0);
                (rise * fall).clamp(0.0, 1.0)
            }
        }
    }
}

#[inline]
pub fn ray_opacity(progress: f32) -> f32 {
    (RAY_OPACITY_BASE - progress * RAY_OPACITY_FALLOFF).max(0.0)
}

#[inline]
pub fn pressure_overlay(progress: f32) -> f32 {
    progress * PRESSURE_OVERLAY_MAX
}

#[inline]
pub fn torpedo_intensity(progress: f32) -> f32 {
    TORPEDO_WINDOW.intensity(progress)
}

#[inline]
pub fn periscope_intensity(progress: f32) -> f32 {
    PERISCOPE_WINDOW.intensity(progress)
}

#[inline]
pub fn ambient_glow(progress: f32) -> f32 {
    if progress > AMBIENT_START {
        ((progress - AMBIENT_START) * AMBIENT_GAIN).min(1.0)
    } else {
        0.0
    }
}

/// Top of the horizontal sonar scan line, percent of the viewport.
#[inline]
pub fn scan_line_top(scroll_y: f64) -> f32 {
    ((scroll_y * SCAN_LINE_RATE) % 100.0) as f32
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightRay {
    pub left_percent: f32,
    pub rotation_deg: f32,
    pub translate_y_px: f32,
}

/// Light rays from the surface; empty once they have faded out.
pub fn light_rays(progress: f32, scroll_y: f64) -> SmallVec<[LightRay; 4]> {
    if ray_opacity(progress) <= RAY_VISIBLE_MIN {
        return SmallVec::new();
    }
    RAY_X_PERCENT
        .iter()
        .enumerate()
        .map(|(i, x)| LightRay {
            left_percent: *x,
            rotation_deg: RAY_BASE_ROTATION_DEG + i as f32 * RAY_ROTATION_STEP_DEG,
            translate_y_px: (-scroll_y * RAY_PARALLAX) as f32,
        })
        .collect()
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WakeBubble {
    pub index: usize,
    pub left_percent: f32,
    pub top_percent: f32,
    pub size_px: f32,
    pub opacity: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct TorpedoFrame {
    /// Local sweep position in \[0, 1\].
    pub t: f32,
    pub intensity: f32,
    pub trail_width_percent: f32,
    pub head_left_percent: f32,
    pub second_trail_width_percent: f32,
    pub second_head_left_percent: f32,
    pub second_visible: bool,
    pub wake: SmallVec<[WakeBubble; WAKE_BUBBLES]>,
    pub show_launch_label: bool,
}

pub fn torpedo(progress: f32) -> Option<TorpedoFrame> {
    let t = TORPEDO_WINDOW.local(progress)?;
    let second = (t - TORPEDO_SECOND_DELAY).max(0.0);
    let wake = (0..WAKE_BUBBLES)
        .filter_map(|i| {
            let left = t * 100.0 - i as f32 * WAKE_SPACING_PERCENT;
            if left < 0.0 {
                return None;
            }
            Some(WakeBubble {
                index: i,
                left_percent: left,
                top_percent: WAKE_BASE_TOP_PERCENT + (i as f32 * 1.5).sin() * 2.0,
                size_px: 2.0 + (i as f32 * 1.7).sin().abs() * 3.0,
                opacity: (WAKE_BASE_OPACITY - i as f32 * WAKE_OPACITY_DECAY).max(0.0),
            })
        })
        .collect();
    Some(TorpedoFrame {
        t,
        intensity: torpedo_intensity(progress),
        trail_width_percent: t * TORPEDO_TRAIL_SPAN,
        head_left_percent: t * TORPEDO_HEAD_SPAN,
        second_trail_width_percent: second * TORPEDO_SECOND_TRAIL_SPAN,
        second_head_left_percent: second * TORPEDO_SECOND_HEAD_SPAN,
        second_visible: t > TORPEDO_SECOND_DELAY,
        wake,
        show_launch_label: t > TORPEDO_LABEL_FROM && t < TORPEDO_LABEL_UNTIL,
    })
}

/// One drifting deep-sea particle. Positions are percent of the viewport.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub base_y: f32,
    pub size: f32,
    pub speed: f32,
}

impl Particle {
    pub fn top_percent(&self, scroll_y: f64) -> f32 {
        let offset = (scroll_y * self.speed as f64 * PARTICLE_PARALLAX) % 100.0;
        ((self.base_y as f64 + offset) % 100.0) as f32
    }
}

/// Scatter the particle field once per page load.
pub fn spawn_particles<R: Rng>(rng: &mut R, count: usize) -> Vec<Particle> {
    (0..count)
        .map(|_| Particle {
            x: rng.gen_range(0.0..100.0),
            base_y: rng.gen_range(0.0..100.0),
            size: PARTICLE_SIZE_MIN + rng.gen::<f32>() * PARTICLE_SIZE_SPAN,
            speed: PARTICLE_SPEED_MIN + rng.gen::<f32>() * PARTICLE_SPEED_SPAN,
        })
        .collect()
}

/// Every scroll-driven visual parameter for one scroll position.
///
/// Each field is computed independently from `progress`; nothing is carried
/// over between frames.
#[derive(Clone, Debug, PartialEq)]
pub struct EffectFrame {
    pub progress: f32,
    pub ray_opacity: f32,
    pub rays: SmallVec<[LightRay; 4]>,
    pub pressure: f32,
    pub scan_line_top: f32,
    pub torpedo: Option<TorpedoFrame>,
    pub periscope: f32,
    pub ambient: f32,
}

impl EffectFrame {
    pub fn compute(progress: ScrollProgress, scroll_y: f64) -> Self {
        let p = progress.value();
        Self {
            progress: p,
            ray_opacity: ray_opacity(p),
            rays: light_rays(p, scroll_y),
            pressure: pressure_overlay(p),
            scan_line_top: scan_line_top(scroll_y),
            torpedo: torpedo(p),
            periscope: periscope_intensity(p),
            ambient: ambient_glow(p),
        }
    }
}
