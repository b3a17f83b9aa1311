//! Kubische Bézier-Kurve: Auswertung von Position, Tangente und Normale.

use glam::Vec2;

/// Rolle eines Kontrollpunkts innerhalb der Kurve.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlPointRole {
    /// Kurvenanfang P0
    Start,
    /// Erster Steuerpunkt P1
    Control1,
    /// Zweiter Steuerpunkt P2
    Control2,
    /// Kurvenende P3
    End,
}

impl ControlPointRole {
    /// Alle vier Rollen in fester Reihenfolge (P0, P1, P2, P3).
    pub const ALL: [ControlPointRole; 4] = [
        ControlPointRole::Start,
        ControlPointRole::Control1,
        ControlPointRole::Control2,
        ControlPointRole::End,
    ];
}

/// Kubische Bézier-Kurve über vier Kontrollpunkte.
///
/// Die Kurve hat keine Identität jenseits ihrer Punkte; abgeleitete Daten
/// (Samples, Projektionen) werden bei jeder Änderung vollständig neu berechnet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicBezier {
    /// Kurvenanfang P0
    pub start: Vec2,
    /// Erster Steuerpunkt P1
    pub control1: Vec2,
    /// Zweiter Steuerpunkt P2
    pub control2: Vec2,
    /// Kurvenende P3
    pub end: Vec2,
}

impl CubicBezier {
    /// Erstellt eine Kurve aus den vier Kontrollpunkten.
    pub fn new(start: Vec2, control1: Vec2, control2: Vec2, end: Vec2) -> Self {
        Self {
            start,
            control1,
            control2,
            end,
        }
    }

    /// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
    ///
    /// `t` außerhalb von [0,1] ist zulässig (polynomiale Extrapolation).
    pub fn position(&self, t: f32) -> Vec2 {
        let inv = 1.0 - t;
        let inv2 = inv * inv;
        let t2 = t * t;
        inv2 * inv * self.start
            + 3.0 * inv2 * t * self.control1
            + 3.0 * inv * t2 * self.control2
            + t2 * t * self.end
    }

    /// B'(t) = 3(1-t)²·(P1-P0) + 6(1-t)t·(P2-P1) + 3t²·(P3-P2)
    pub fn tangent(&self, t: f32) -> Vec2 {
        let inv = 1.0 - t;
        3.0 * inv * inv * (self.control1 - self.start)
            + 6.0 * inv * t * (self.control2 - self.control1)
            + 3.0 * t * t * (self.end - self.control2)
    }

    /// Einheits-Normale: Tangente um 90° gedreht und normalisiert.
    ///
    /// Bei degenerierter Kurve (Tangentenlänge ~0, z.B. alle vier Punkte
    /// deckungsgleich) wird `Vec2::ZERO` zurückgegeben — niemals NaN.
    pub fn normal(&self, t: f32) -> Vec2 {
        self.tangent(t).perp().normalize_or_zero()
    }

    /// Gibt den Kontrollpunkt einer Rolle zurück.
    pub fn point(&self, role: ControlPointRole) -> Vec2 {
        match role {
            ControlPointRole::Start => self.start,
            ControlPointRole::Control1 => self.control1,
            ControlPointRole::Control2 => self.control2,
            ControlPointRole::End => self.end,
        }
    }

    /// Überschreibt den Kontrollpunkt einer Rolle.
    ///
    /// Keine Bereichsprüfung — jede endliche Koordinate ist zulässig.
    pub fn set_point(&mut self, role: ControlPointRole, pos: Vec2) {
        match role {
            ControlPointRole::Start => self.start = pos,
            ControlPointRole::Control1 => self.control1 = pos,
            ControlPointRole::Control2 => self.control2 = pos,
            ControlPointRole::End => self.end = pos,
        }
    }

    /// Achsenparallele Bounding Box der vier Kontrollpunkte.
    ///
    /// Die konvexe Hülle der Kontrollpunkte umschließt die Kurve,
    /// für Kamera-Zentrierung genügt die Punkt-Box.
    pub fn control_bounds(&self) -> (Vec2, Vec2) {
        let min = self
            .start
            .min(self.control1)
            .min(self.control2)
            .min(self.end);
        let max = self
            .start
            .max(self.control1)
            .max(self.control2)
            .max(self.end);
        (min, max)
    }
}
