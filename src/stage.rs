//! The stage: a self-contained ECS world plus its per-tick schedule.
//!
//! [`UiStage`] owns a [`World`] holding every UI element and a [`Schedule`]
//! wiring the tween, frame-animation, layout and pointer systems in
//! dependency order. A host embeds it with a handful of calls per frame:
//!
//! ```text
//! stage.set_pointer(cursor_px, button_down);
//! stage.tick(frame_dt);
//! for cmd in stage.drain_audio() { /* route to the mixer */ }
//! // render pass: query Sprite + ScreenPosition + Scale + Angle + Tint + ZIndex
//! ```
//!
//! Elements are spawned from [`ElementDef`] descriptions and addressed by
//! [`Entity`] (or looked up by name). Everything else stays plain ECS: the
//! host can reach any component or resource through [`UiStage::world_mut`]
//! and subscribe to observer events through [`UiStage::observe`].

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use bevy_ecs::system::IntoObserverSystem;
use glam::Vec2;
use std::path::PathBuf;

use crate::components::anchor::Anchor;
use crate::components::angle::Angle;
use crate::components::frameanim::{FrameAnim, PlayMode};
use crate::components::framerect::FrameRect;
use crate::components::scale::Scale;
use crate::components::screenposition::ScreenPosition;
use crate::components::soundcues::SoundCues;
use crate::components::sprite::Sprite;
use crate::components::tint::Tint;
use crate::components::toucharea::TouchArea;
use crate::components::tween::{
    TweenAlpha, TweenAngle, TweenColor, TweenPosition, TweenProperty, TweenScale,
};
use crate::components::uiname::UiName;
use crate::components::zindex::{OrderBand, ZIndex};
use crate::easing::Ease;
use crate::error::{AtlasError, StageError};
use crate::events::audio::AudioCmd;
use crate::resources::atlas::{AtlasStore, hd_variant};
use crate::resources::pointer::{PointerCapture, PointerState};
use crate::resources::screensize::ScreenSize;
use crate::resources::stageconfig::StageConfig;
use crate::resources::worldtime::WorldTime;
use crate::systems::audio::update_audio_cmds;
use crate::systems::frameanim::update_frame_animations;
use crate::systems::layout::{flag_layout_changes, resolve_layout};
use crate::systems::pointer::dispatch_pointer;
use crate::systems::time::update_world_time;
use crate::systems::tween::{
    reap_finished_tweens, update_tween_alpha, update_tween_angle, update_tween_color,
    update_tween_position, update_tween_scale,
};

/// Description of an element to spawn through [`UiStage::create_element`].
///
/// `filename` names either an atlas frame family (`frames > 0`, rects looked
/// up as `name_0 .. name_{frames-1}` with the extension kept in place) or a
/// standalone texture (`frames == 0`, which requires an explicit size since
/// the stage never decodes image files).
#[derive(Clone, Debug)]
pub struct ElementDef {
    /// Atlas frame family or standalone texture name.
    pub filename: String,
    /// Number of indexed frames to collect. Zero marks a standalone texture.
    pub frames: usize,
    /// Texture key override; defaults to the loaded atlas page texture.
    pub page: Option<String>,
    /// Playback sub-range within the collected frames.
    pub range: Option<(usize, usize)>,
    pub mode: PlayMode,
    /// Playback rate; falls back to [`StageConfig::default_fps`].
    pub fps: Option<f32>,
    /// Name for [`UiStage::find`] lookups.
    pub name: Option<String>,
    pub band: OrderBand,
    pub touchable: bool,
    pub cues: SoundCues,
    /// Natural size override in pixels. Mandatory for standalone textures.
    pub size: Option<(f32, f32)>,
}

impl ElementDef {
    pub fn new(filename: impl Into<String>) -> Self {
        ElementDef {
            filename: filename.into(),
            frames: 0,
            page: None,
            range: None,
            mode: PlayMode::None,
            fps: None,
            name: None,
            band: OrderBand::default(),
            touchable: false,
            cues: SoundCues::default(),
            size: None,
        }
    }

    /// Collect `frames` indexed atlas rects and animate them with `mode`.
    /// Modes other than [`PlayMode::None`] start playing on creation.
    pub fn with_frames(mut self, frames: usize, mode: PlayMode) -> Self {
        self.frames = frames;
        self.mode = mode;
        self
    }

    /// Restrict playback to frames `first..=last`.
    pub fn with_range(mut self, first: usize, last: usize) -> Self {
        self.range = Some((first, last));
        self
    }

    pub fn with_fps(mut self, fps: f32) -> Self {
        self.fps = Some(fps);
        self
    }

    /// Draw from this texture key instead of the atlas page texture.
    pub fn with_page(mut self, page: impl Into<String>) -> Self {
        self.page = Some(page.into());
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_band(mut self, band: OrderBand) -> Self {
        self.band = band;
        self
    }

    /// Let pointer dispatch consider this element.
    pub fn touchable(mut self) -> Self {
        self.touchable = true;
        self
    }

    pub fn with_cues(mut self, cues: SoundCues) -> Self {
        self.cues = cues;
        self
    }

    /// Natural size in pixels, overriding atlas frame metadata.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.size = Some((width, height));
        self
    }
}

/// The animation stage. Owns the element world and runs it one tick at a
/// time under host control; see the module docs for the per-frame protocol.
pub struct UiStage {
    world: World,
    schedule: Schedule,
}

impl std::fmt::Debug for UiStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("UiStage").finish_non_exhaustive()
    }
}

impl UiStage {
    pub fn new(config: StageConfig) -> Self {
        let mut world = World::new();
        world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));
        let (width, height) = config.screen_size();
        world.insert_resource(ScreenSize {
            w: width as i32,
            h: height as i32,
        });
        world.insert_resource(PointerState::default());
        world.insert_resource(PointerCapture::default());
        world.insert_resource(AtlasStore::default());
        world.init_resource::<Messages<AudioCmd>>();
        world.insert_resource(config);

        let mut schedule = Schedule::default();
        // Message pump first, so cues written later this tick are still
        // pending when the host drains after the tick.
        schedule.add_systems(update_audio_cmds);
        schedule.add_systems(update_tween_position.after(update_audio_cmds));
        schedule.add_systems(update_tween_scale.after(update_audio_cmds));
        schedule.add_systems(update_tween_angle.after(update_audio_cmds));
        schedule.add_systems(update_tween_alpha.after(update_audio_cmds));
        schedule.add_systems(update_tween_color.after(update_audio_cmds));
        schedule.add_systems(
            reap_finished_tweens
                .after(update_tween_position)
                .after(update_tween_scale)
                .after(update_tween_angle)
                .after(update_tween_alpha)
                .after(update_tween_color),
        );
        schedule.add_systems(update_frame_animations.after(update_audio_cmds));
        schedule.add_systems(
            flag_layout_changes
                .after(update_tween_position)
                .after(update_tween_scale),
        );
        schedule.add_systems(resolve_layout.after(flag_layout_changes));
        schedule.add_systems(dispatch_pointer.after(resolve_layout));

        UiStage { world, schedule }
    }

    /// Build a stage from an INI config file.
    ///
    /// The file must load cleanly. Hosts that treat the file as optional
    /// can load a [`StageConfig`] themselves, fall back to defaults on
    /// error and call [`UiStage::new`] with the result.
    pub fn from_config_file(path: impl Into<PathBuf>) -> Result<Self, StageError> {
        let mut config = StageConfig::with_path(path);
        config.load_from_file().map_err(StageError::Config)?;
        Ok(Self::new(config))
    }

    /// Advance the stage by `dt` seconds: clocks, tweens, frame animations,
    /// layout resolution and pointer dispatch, in that order.
    pub fn tick(&mut self, dt: f32) {
        update_world_time(&mut self.world, dt);
        self.schedule.run(&mut self.world);
        self.world.clear_trackers();
    }

    /// Feed the pointer state for the next tick. Edge flags are derived from
    /// the previous call.
    pub fn set_pointer(&mut self, pos: Vec2, pressed: bool) {
        self.world
            .resource_mut::<PointerState>()
            .advance(pos, pressed);
    }

    /// Replace the screen size. Every element re-anchors on the next tick.
    pub fn set_screen_size(&mut self, w: i32, h: i32) {
        self.world.insert_resource(ScreenSize { w, h });
    }

    /// Scale the animation clock. Zero freezes every time-scaled tween.
    pub fn set_time_scale(&mut self, time_scale: f32) {
        self.world.resource_mut::<WorldTime>().time_scale = time_scale;
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Load a TexturePacker JSON descriptor into the atlas table.
    ///
    /// When the configuration selects an HD tier the resolution suffix is
    /// inserted into `path` before loading (`menu.json` -> `menu2x.json`).
    /// Returns the number of frames added.
    pub fn load_atlas(&mut self, path: &str) -> Result<usize, StageError> {
        let path = match self.world.resource::<StageConfig>().hd_suffix() {
            Some(suffix) => hd_variant(path, suffix),
            None => path.to_string(),
        };
        let count = self.world.resource_mut::<AtlasStore>().load_file(&path)?;
        log::info!("Loaded atlas '{}' ({} frames)", path, count);
        Ok(count)
    }

    /// Spawn an element from its description.
    ///
    /// Atlas-backed elements require a loaded atlas and at least one valid
    /// frame; standalone elements require an explicit size. The new element
    /// starts hidden behind nothing, anchored to the screen origin and
    /// pending layout resolution on the next tick.
    pub fn create_element(&mut self, def: ElementDef) -> Result<Entity, StageError> {
        let config = self.world.resource::<StageConfig>();
        let default_fps = config.default_fps;
        let hd_suffix = config.hd_suffix();

        let (anim, natural, tex_key) = if def.frames == 0 {
            let Some(size) = def.size else {
                return Err(StageError::Atlas(AtlasError::NoFrames(def.filename)));
            };
            let tex = match &def.page {
                Some(page) => page.clone(),
                None => match hd_suffix {
                    Some(suffix) => hd_variant(&def.filename, suffix),
                    None => def.filename.clone(),
                },
            };
            (FrameAnim::static_image(), size, tex)
        } else {
            let atlas = self.world.resource::<AtlasStore>();
            if !atlas.is_loaded() {
                return Err(StageError::AtlasNotLoaded);
            }
            let seq = atlas.frame_sequence(&def.filename, def.frames);
            if seq.standalone && seq.frames[0].is_zero() {
                return Err(StageError::Atlas(AtlasError::NoFrames(def.filename)));
            }
            let natural = def.size.unwrap_or((seq.natural_w, seq.natural_h));
            let tex = match &def.page {
                Some(page) => page.clone(),
                None => atlas.texture().unwrap_or(&def.filename).to_string(),
            };
            let mut anim =
                FrameAnim::new(seq.frames, def.mode).with_fps(def.fps.unwrap_or(default_fps));
            if let Some((first, last)) = def.range {
                anim = anim.with_range(first, last);
            }
            if def.mode != PlayMode::None {
                anim.play();
            }
            (anim, natural, tex)
        };

        let frame = anim.current_rect();
        let mut element = self.world.spawn((
            Sprite::new(tex_key, natural.0, natural.1).with_frame(frame),
            anim,
            Anchor::new(),
            ScreenPosition::default(),
            Scale::default(),
            Angle::default(),
            Tint::default(),
            TouchArea::new(def.touchable),
            ZIndex::from(def.band),
            def.cues,
        ));
        if let Some(name) = def.name {
            element.insert(UiName::new(name));
        }
        let entity = element.id();
        log::debug!("Created element '{}' as {:?}", def.filename, entity);
        Ok(entity)
    }

    /// Remove an element (or any stage-owned entity, observers included).
    /// A pointer capture held by the entity is released without a touch-up.
    pub fn despawn(&mut self, entity: Entity) -> Result<(), StageError> {
        if !self.world.entities().contains(entity) {
            return Err(StageError::UnknownEntity(entity));
        }
        let mut capture = self.world.resource_mut::<PointerCapture>();
        if capture.owner == Some(entity) {
            capture.owner = None;
        }
        self.world.despawn(entity);
        Ok(())
    }

    /// Look up an element by the name given at creation. First match wins;
    /// names are not required to be unique.
    pub fn find(&mut self, name: &str) -> Option<Entity> {
        let mut query = self.world.query::<(Entity, &UiName)>();
        query
            .iter(&self.world)
            .find(|(_, ui_name)| ui_name.0 == name)
            .map(|(entity, _)| entity)
    }

    /// Re-parent `child` under `parent`, or detach it with `None`. The child
    /// keeps its anchor configuration and re-resolves on the next tick.
    ///
    /// Fails with [`StageError::ParentCycle`] when `parent` is the child
    /// itself or one of its descendants.
    pub fn set_parent(&mut self, child: Entity, parent: Option<Entity>) -> Result<(), StageError> {
        if self.world.get::<Anchor>(child).is_none() {
            return Err(StageError::UnknownEntity(child));
        }
        if let Some(parent) = parent {
            if self.world.get::<Anchor>(parent).is_none() {
                return Err(StageError::UnknownEntity(parent));
            }
            // Walk the ancestor chain: adopting a descendant (or oneself)
            // would make layout resolution wait on itself forever.
            let mut cursor = Some(parent);
            while let Some(node) = cursor {
                if node == child {
                    return Err(StageError::ParentCycle { child, parent });
                }
                cursor = self.world.get::<Anchor>(node).and_then(|a| a.parent);
            }
        }
        if let Some(mut anchor) = self.world.get_mut::<Anchor>(child) {
            anchor.parent = parent;
            anchor.dirty = true;
        }
        Ok(())
    }

    /// Move an element to a stacking band.
    pub fn set_order(&mut self, entity: Entity, band: OrderBand) -> Result<(), StageError> {
        match self.world.get_mut::<ZIndex>(entity) {
            Some(mut z) => {
                *z = ZIndex::from(band);
                Ok(())
            }
            None => Err(StageError::UnknownEntity(entity)),
        }
    }

    /// Show or hide an element.
    ///
    /// Hiding suspends tween updates, frame stepping and pointer dispatch
    /// for the element but leaves its `touchable` flag alone, so showing it
    /// again restores the interactivity it was configured with. Finished
    /// tween components still attached to the element are removed.
    pub fn set_visible(&mut self, entity: Entity, visible: bool) -> Result<(), StageError> {
        match self.world.get_mut::<Sprite>(entity) {
            Some(mut sprite) => sprite.visible = visible,
            None => return Err(StageError::UnknownEntity(entity)),
        }
        self.reap_finished_on(entity);
        Ok(())
    }

    /// Register an observer for a stage event such as
    /// [`TouchDown`](crate::events::touch::TouchDown) or
    /// [`TweenFinished`](crate::events::tween::TweenFinished). Despawn the
    /// returned entity to unsubscribe.
    pub fn observe<E: Event, B: Bundle, M>(
        &mut self,
        system: impl IntoObserverSystem<E, B, M>,
    ) -> Entity {
        self.world.spawn(Observer::new(system)).id()
    }

    /// Take every audio command queued since the last drain.
    pub fn drain_audio(&mut self) -> Vec<AudioCmd> {
        self.world
            .resource_mut::<Messages<AudioCmd>>()
            .drain()
            .collect()
    }

    // ---- frame animation playback ----

    /// Start stepping the element's frames forward from the current frame.
    pub fn play_animation(&mut self, entity: Entity) -> Result<(), StageError> {
        match self.world.get_mut::<FrameAnim>(entity) {
            Some(mut anim) => {
                anim.play();
                Ok(())
            }
            None => Err(StageError::UnknownEntity(entity)),
        }
    }

    /// Play the element's frames in reverse, starting from the last frame.
    pub fn play_animation_backward(&mut self, entity: Entity) -> Result<(), StageError> {
        let rect = match self.world.get_mut::<FrameAnim>(entity) {
            Some(mut anim) => {
                anim.play_backward();
                anim.current_rect()
            }
            None => return Err(StageError::UnknownEntity(entity)),
        };
        self.sync_sprite_frame(entity, rect);
        Ok(())
    }

    /// Halt frame stepping and rewind to the first frame.
    pub fn stop_animation(&mut self, entity: Entity) -> Result<(), StageError> {
        let rect = match self.world.get_mut::<FrameAnim>(entity) {
            Some(mut anim) => {
                anim.stop();
                anim.current_rect()
            }
            None => return Err(StageError::UnknownEntity(entity)),
        };
        self.sync_sprite_frame(entity, rect);
        Ok(())
    }

    /// Jump to a frame without changing the playing state. Out-of-range
    /// indices are ignored.
    pub fn set_frame(&mut self, entity: Entity, index: usize) -> Result<(), StageError> {
        let rect = match self.world.get_mut::<FrameAnim>(entity) {
            Some(mut anim) => {
                anim.set_frame(index);
                anim.current_rect()
            }
            None => return Err(StageError::UnknownEntity(entity)),
        };
        self.sync_sprite_frame(entity, rect);
        Ok(())
    }

    // ---- relative geometry ----

    /// Resolved position of the element as a fraction of its parent box
    /// (the parent's touch rect, or the screen when unparented).
    pub fn relative_position(&self, entity: Entity) -> Result<Vec2, StageError> {
        let pos = self
            .world
            .get::<ScreenPosition>(entity)
            .ok_or(StageError::UnknownEntity(entity))?
            .pos;
        let (parent_w, parent_h) = self.parent_box_size(entity);
        Ok(Vec2::new(ratio(pos.x, parent_w), ratio(pos.y, parent_h)))
    }

    /// Effective (scaled) size of the element as a fraction of its parent
    /// box.
    pub fn relative_size(&self, entity: Entity) -> Result<Vec2, StageError> {
        let sprite = self
            .world
            .get::<Sprite>(entity)
            .ok_or(StageError::UnknownEntity(entity))?;
        let scale = self
            .world
            .get::<Scale>(entity)
            .ok_or(StageError::UnknownEntity(entity))?;
        let w = sprite.width * scale.x;
        let h = sprite.height * scale.y;
        let (parent_w, parent_h) = self.parent_box_size(entity);
        Ok(Vec2::new(ratio(w, parent_w), ratio(h, parent_h)))
    }

    /// Resize the element to a fraction of its parent box by adjusting its
    /// scale. Layout re-resolves on the next tick.
    pub fn set_relative_size(&mut self, entity: Entity, rel: Vec2) -> Result<(), StageError> {
        let (natural_w, natural_h) = match self.world.get::<Sprite>(entity) {
            Some(sprite) => (sprite.width, sprite.height),
            None => return Err(StageError::UnknownEntity(entity)),
        };
        let (parent_w, parent_h) = self.parent_box_size(entity);
        if let Some(mut scale) = self.world.get_mut::<Scale>(entity) {
            scale.x = ratio(rel.x * parent_w, natural_w);
            scale.y = ratio(rel.y * parent_h, natural_h);
        }
        Ok(())
    }

    // ---- tweens ----

    /// Attach a position tween, replacing any position tween already on the
    /// element (the replaced tween never reports completion). The element
    /// snaps to the tween's `from` value immediately and its easing-start
    /// cue fires; interpolation begins after the delay on the next tick.
    pub fn start_tween_position(
        &mut self,
        entity: Entity,
        mut tween: TweenPosition,
    ) -> Result<(), StageError> {
        self.ensure_element(entity)?;
        tween.start_at = Some(self.clock_for(tween.affected_by_time_scale) + tween.delay);
        if let Some(mut anchor) = self.world.get_mut::<Anchor>(entity) {
            anchor.position_from_top_left(tween.from.y, tween.from.x);
        }
        self.play_easing_start_cue(entity);
        self.world.entity_mut(entity).insert(tween);
        Ok(())
    }

    /// Attach a scale tween. Same replacement and snap rules as
    /// [`start_tween_position`](Self::start_tween_position).
    pub fn start_tween_scale(
        &mut self,
        entity: Entity,
        mut tween: TweenScale,
    ) -> Result<(), StageError> {
        self.ensure_element(entity)?;
        tween.start_at = Some(self.clock_for(tween.affected_by_time_scale) + tween.delay);
        if let Some(mut scale) = self.world.get_mut::<Scale>(entity) {
            scale.x = tween.from;
            scale.y = tween.from;
        }
        self.play_easing_start_cue(entity);
        self.world.entity_mut(entity).insert(tween);
        Ok(())
    }

    /// Attach an angle tween. Same replacement and snap rules as
    /// [`start_tween_position`](Self::start_tween_position).
    pub fn start_tween_angle(
        &mut self,
        entity: Entity,
        mut tween: TweenAngle,
    ) -> Result<(), StageError> {
        self.ensure_element(entity)?;
        tween.start_at = Some(self.clock_for(tween.affected_by_time_scale) + tween.delay);
        if let Some(mut angle) = self.world.get_mut::<Angle>(entity) {
            angle.degrees = tween.from;
        }
        self.play_easing_start_cue(entity);
        self.world.entity_mut(entity).insert(tween);
        Ok(())
    }

    /// Attach an alpha tween. Same replacement and snap rules as
    /// [`start_tween_position`](Self::start_tween_position).
    pub fn start_tween_alpha(
        &mut self,
        entity: Entity,
        mut tween: TweenAlpha,
    ) -> Result<(), StageError> {
        self.ensure_element(entity)?;
        tween.start_at = Some(self.clock_for(tween.affected_by_time_scale) + tween.delay);
        if let Some(mut tint) = self.world.get_mut::<Tint>(entity) {
            tint.alpha = tween.from;
        }
        self.play_easing_start_cue(entity);
        self.world.entity_mut(entity).insert(tween);
        Ok(())
    }

    /// Attach a color tween. Same replacement and snap rules as
    /// [`start_tween_position`](Self::start_tween_position).
    pub fn start_tween_color(
        &mut self,
        entity: Entity,
        mut tween: TweenColor,
    ) -> Result<(), StageError> {
        self.ensure_element(entity)?;
        tween.start_at = Some(self.clock_for(tween.affected_by_time_scale) + tween.delay);
        if let Some(mut tint) = self.world.get_mut::<Tint>(entity) {
            let [r, g, b] = tween.from;
            tint.set_rgb(r, g, b);
        }
        self.play_easing_start_cue(entity);
        self.world.entity_mut(entity).insert(tween);
        Ok(())
    }

    /// Tween the element from where it is now to `to` (parent-relative).
    pub fn tween_position_to(
        &mut self,
        entity: Entity,
        to: Vec2,
        duration: f32,
        easing: Ease,
    ) -> Result<(), StageError> {
        let from = self.relative_position(entity)?;
        self.start_tween_position(
            entity,
            TweenPosition::new(from, to, duration).with_easing(easing),
        )
    }

    /// Tween the element from `from` back to where it is now.
    pub fn tween_position_from(
        &mut self,
        entity: Entity,
        from: Vec2,
        duration: f32,
        easing: Ease,
    ) -> Result<(), StageError> {
        let to = self.relative_position(entity)?;
        self.start_tween_position(
            entity,
            TweenPosition::new(from, to, duration).with_easing(easing),
        )
    }

    pub fn tween_position_from_to(
        &mut self,
        entity: Entity,
        from: Vec2,
        to: Vec2,
        duration: f32,
        easing: Ease,
    ) -> Result<(), StageError> {
        self.start_tween_position(
            entity,
            TweenPosition::new(from, to, duration).with_easing(easing),
        )
    }

    /// Tween the element's scale from its current value to `to`.
    pub fn tween_scale_to(
        &mut self,
        entity: Entity,
        to: f32,
        duration: f32,
        easing: Ease,
    ) -> Result<(), StageError> {
        let from = self
            .world
            .get::<Scale>(entity)
            .ok_or(StageError::UnknownEntity(entity))?
            .x;
        self.start_tween_scale(entity, TweenScale::new(from, to, duration).with_easing(easing))
    }

    /// Tween the element's scale from `from` back to its current value.
    pub fn tween_scale_from(
        &mut self,
        entity: Entity,
        from: f32,
        duration: f32,
        easing: Ease,
    ) -> Result<(), StageError> {
        let to = self
            .world
            .get::<Scale>(entity)
            .ok_or(StageError::UnknownEntity(entity))?
            .x;
        self.start_tween_scale(entity, TweenScale::new(from, to, duration).with_easing(easing))
    }

    pub fn tween_scale_from_to(
        &mut self,
        entity: Entity,
        from: f32,
        to: f32,
        duration: f32,
        easing: Ease,
    ) -> Result<(), StageError> {
        self.start_tween_scale(entity, TweenScale::new(from, to, duration).with_easing(easing))
    }

    /// Tween the element's rotation from its current angle to `to` degrees.
    pub fn tween_angle_to(
        &mut self,
        entity: Entity,
        to: f32,
        duration: f32,
        easing: Ease,
    ) -> Result<(), StageError> {
        let from = self
            .world
            .get::<Angle>(entity)
            .ok_or(StageError::UnknownEntity(entity))?
            .degrees;
        self.start_tween_angle(entity, TweenAngle::new(from, to, duration).with_easing(easing))
    }

    /// Tween the element's rotation from `from` degrees back to its current
    /// angle.
    pub fn tween_angle_from(
        &mut self,
        entity: Entity,
        from: f32,
        duration: f32,
        easing: Ease,
    ) -> Result<(), StageError> {
        let to = self
            .world
            .get::<Angle>(entity)
            .ok_or(StageError::UnknownEntity(entity))?
            .degrees;
        self.start_tween_angle(entity, TweenAngle::new(from, to, duration).with_easing(easing))
    }

    pub fn tween_angle_from_to(
        &mut self,
        entity: Entity,
        from: f32,
        to: f32,
        duration: f32,
        easing: Ease,
    ) -> Result<(), StageError> {
        self.start_tween_angle(entity, TweenAngle::new(from, to, duration).with_easing(easing))
    }

    /// Fade the element from its current opacity to `to`.
    pub fn tween_alpha_to(
        &mut self,
        entity: Entity,
        to: f32,
        duration: f32,
        easing: Ease,
    ) -> Result<(), StageError> {
        let from = self
            .world
            .get::<Tint>(entity)
            .ok_or(StageError::UnknownEntity(entity))?
            .alpha;
        self.start_tween_alpha(entity, TweenAlpha::new(from, to, duration).with_easing(easing))
    }

    /// Fade the element from `from` back to its current opacity.
    pub fn tween_alpha_from(
        &mut self,
        entity: Entity,
        from: f32,
        duration: f32,
        easing: Ease,
    ) -> Result<(), StageError> {
        let to = self
            .world
            .get::<Tint>(entity)
            .ok_or(StageError::UnknownEntity(entity))?
            .alpha;
        self.start_tween_alpha(entity, TweenAlpha::new(from, to, duration).with_easing(easing))
    }

    pub fn tween_alpha_from_to(
        &mut self,
        entity: Entity,
        from: f32,
        to: f32,
        duration: f32,
        easing: Ease,
    ) -> Result<(), StageError> {
        self.start_tween_alpha(entity, TweenAlpha::new(from, to, duration).with_easing(easing))
    }

    /// Sweep the element's tint from its current RGB to `to`.
    pub fn tween_color_to(
        &mut self,
        entity: Entity,
        to: [u8; 3],
        duration: f32,
        easing: Ease,
    ) -> Result<(), StageError> {
        let tint = self
            .world
            .get::<Tint>(entity)
            .ok_or(StageError::UnknownEntity(entity))?;
        let from = [tint.r, tint.g, tint.b];
        self.start_tween_color(entity, TweenColor::new(from, to, duration).with_easing(easing))
    }

    /// Sweep the element's tint from `from` back to its current RGB.
    pub fn tween_color_from(
        &mut self,
        entity: Entity,
        from: [u8; 3],
        duration: f32,
        easing: Ease,
    ) -> Result<(), StageError> {
        let tint = self
            .world
            .get::<Tint>(entity)
            .ok_or(StageError::UnknownEntity(entity))?;
        let to = [tint.r, tint.g, tint.b];
        self.start_tween_color(entity, TweenColor::new(from, to, duration).with_easing(easing))
    }

    pub fn tween_color_from_to(
        &mut self,
        entity: Entity,
        from: [u8; 3],
        to: [u8; 3],
        duration: f32,
        easing: Ease,
    ) -> Result<(), StageError> {
        self.start_tween_color(entity, TweenColor::new(from, to, duration).with_easing(easing))
    }

    /// Resume a paused tween. Progress is clock-based, so a resumed tween
    /// jumps to where the clock says it should be rather than continuing
    /// from where it paused. Finished tweens stay finished.
    pub fn play_tween(&mut self, entity: Entity, property: TweenProperty) -> Result<(), StageError> {
        self.ensure_element(entity)?;
        self.set_tween_running(entity, property, true);
        Ok(())
    }

    /// Pause a tween in place. The element keeps the last applied value.
    pub fn pause_tween(
        &mut self,
        entity: Entity,
        property: TweenProperty,
    ) -> Result<(), StageError> {
        self.ensure_element(entity)?;
        self.set_tween_running(entity, property, false);
        Ok(())
    }

    /// Stop a tween where it stands. It is removed on the next tick and
    /// never reports completion.
    pub fn stop_tween(&mut self, entity: Entity, property: TweenProperty) -> Result<(), StageError> {
        self.ensure_element(entity)?;
        self.halt_tween(entity, property);
        Ok(())
    }

    /// [`play_tween`](Self::play_tween) across every property.
    pub fn play_all_tweens(&mut self, entity: Entity) -> Result<(), StageError> {
        self.ensure_element(entity)?;
        for property in TweenProperty::ALL {
            self.set_tween_running(entity, property, true);
        }
        Ok(())
    }

    /// [`pause_tween`](Self::pause_tween) across every property.
    pub fn pause_all_tweens(&mut self, entity: Entity) -> Result<(), StageError> {
        self.ensure_element(entity)?;
        for property in TweenProperty::ALL {
            self.set_tween_running(entity, property, false);
        }
        Ok(())
    }

    /// [`stop_tween`](Self::stop_tween) across every property.
    pub fn stop_all_tweens(&mut self, entity: Entity) -> Result<(), StageError> {
        self.ensure_element(entity)?;
        for property in TweenProperty::ALL {
            self.halt_tween(entity, property);
        }
        Ok(())
    }

    /// Toggle auto-reverse on an attached tween.
    pub fn set_tween_autoreverse(
        &mut self,
        entity: Entity,
        property: TweenProperty,
        autoreverse: bool,
    ) -> Result<(), StageError> {
        self.ensure_element(entity)?;
        match property {
            TweenProperty::Position => {
                if let Some(mut tw) = self.world.get_mut::<TweenPosition>(entity) {
                    tw.autoreverse = autoreverse;
                }
            }
            TweenProperty::Scale => {
                if let Some(mut tw) = self.world.get_mut::<TweenScale>(entity) {
                    tw.autoreverse = autoreverse;
                }
            }
            TweenProperty::Angle => {
                if let Some(mut tw) = self.world.get_mut::<TweenAngle>(entity) {
                    tw.autoreverse = autoreverse;
                }
            }
            TweenProperty::Alpha => {
                if let Some(mut tw) = self.world.get_mut::<TweenAlpha>(entity) {
                    tw.autoreverse = autoreverse;
                }
            }
            TweenProperty::Color => {
                if let Some(mut tw) = self.world.get_mut::<TweenColor>(entity) {
                    tw.autoreverse = autoreverse;
                }
            }
        }
        Ok(())
    }

    // ---- internals ----

    fn ensure_element(&self, entity: Entity) -> Result<(), StageError> {
        if self.world.get::<Sprite>(entity).is_some() {
            Ok(())
        } else {
            Err(StageError::UnknownEntity(entity))
        }
    }

    /// The stepping system only rewrites the sprite rect when a step fires;
    /// direct frame jumps push the rect here instead.
    fn sync_sprite_frame(&mut self, entity: Entity, rect: FrameRect) {
        if let Some(mut sprite) = self.world.get_mut::<Sprite>(entity) {
            sprite.frame = rect;
        }
    }

    fn clock_for(&self, affected_by_time_scale: bool) -> f32 {
        self.world
            .resource::<WorldTime>()
            .clock(affected_by_time_scale)
    }

    fn play_easing_start_cue(&mut self, entity: Entity) {
        let id = self
            .world
            .get::<SoundCues>(entity)
            .and_then(|cues| cues.easing_start.clone());
        if let Some(id) = id {
            self.world
                .resource_mut::<Messages<AudioCmd>>()
                .write(AudioCmd::PlayFx { id, looped: false });
        }
    }

    fn set_tween_running(&mut self, entity: Entity, property: TweenProperty, running: bool) {
        match property {
            TweenProperty::Position => {
                if let Some(mut tw) = self.world.get_mut::<TweenPosition>(entity)
                    && !tw.finished
                {
                    tw.running = running;
                }
            }
            TweenProperty::Scale => {
                if let Some(mut tw) = self.world.get_mut::<TweenScale>(entity)
                    && !tw.finished
                {
                    tw.running = running;
                }
            }
            TweenProperty::Angle => {
                if let Some(mut tw) = self.world.get_mut::<TweenAngle>(entity)
                    && !tw.finished
                {
                    tw.running = running;
                }
            }
            TweenProperty::Alpha => {
                if let Some(mut tw) = self.world.get_mut::<TweenAlpha>(entity)
                    && !tw.finished
                {
                    tw.running = running;
                }
            }
            TweenProperty::Color => {
                if let Some(mut tw) = self.world.get_mut::<TweenColor>(entity)
                    && !tw.finished
                {
                    tw.running = running;
                }
            }
        }
    }

    fn halt_tween(&mut self, entity: Entity, property: TweenProperty) {
        match property {
            TweenProperty::Position => {
                if let Some(mut tw) = self.world.get_mut::<TweenPosition>(entity) {
                    tw.stop();
                }
            }
            TweenProperty::Scale => {
                if let Some(mut tw) = self.world.get_mut::<TweenScale>(entity) {
                    tw.stop();
                }
            }
            TweenProperty::Angle => {
                if let Some(mut tw) = self.world.get_mut::<TweenAngle>(entity) {
                    tw.stop();
                }
            }
            TweenProperty::Alpha => {
                if let Some(mut tw) = self.world.get_mut::<TweenAlpha>(entity) {
                    tw.stop();
                }
            }
            TweenProperty::Color => {
                if let Some(mut tw) = self.world.get_mut::<TweenColor>(entity) {
                    tw.stop();
                }
            }
        }
    }

    /// Remove finished tween components from one element without waiting
    /// for the next tick's sweep.
    fn reap_finished_on(&mut self, entity: Entity) {
        if self
            .world
            .get::<TweenPosition>(entity)
            .is_some_and(|tw| tw.finished)
        {
            self.world.entity_mut(entity).remove::<TweenPosition>();
        }
        if self
            .world
            .get::<TweenScale>(entity)
            .is_some_and(|tw| tw.finished)
        {
            self.world.entity_mut(entity).remove::<TweenScale>();
        }
        if self
            .world
            .get::<TweenAngle>(entity)
            .is_some_and(|tw| tw.finished)
        {
            self.world.entity_mut(entity).remove::<TweenAngle>();
        }
        if self
            .world
            .get::<TweenAlpha>(entity)
            .is_some_and(|tw| tw.finished)
        {
            self.world.entity_mut(entity).remove::<TweenAlpha>();
        }
        if self
            .world
            .get::<TweenColor>(entity)
            .is_some_and(|tw| tw.finished)
        {
            self.world.entity_mut(entity).remove::<TweenColor>();
        }
    }

    /// Size of the box the element is positioned against: the parent's
    /// resolved touch rect, or the screen when unparented.
    fn parent_box_size(&self, entity: Entity) -> (f32, f32) {
        let parent = self.world.get::<Anchor>(entity).and_then(|a| a.parent);
        if let Some(parent) = parent
            && let Some(area) = self.world.get::<TouchArea>(parent)
        {
            return (area.rect.w, area.rect.h);
        }
        let screen = self.world.resource::<ScreenSize>();
        (screen.w as f32, screen.h as f32)
    }
}

/// Division with degenerate boxes collapsing to zero instead of inf/NaN.
fn ratio(value: f32, size: f32) -> f32 {
    if size == 0.0 { 0.0 } else { value / size }
}
