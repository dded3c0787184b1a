//! Interactive reader loop.

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind};
use folio_core::content::PageContent;
use folio_core::layout::{PageLayout, SectionBox};
use folio_core::state::PageState;
use folio_core::views;
use folio_protocol::{LINE_HEIGHT, SectionId, ThemeToken, Viewport};
use ratatui::{layout::Rect, style::Style, widgets::Block};

use crate::renderer;
use crate::term::TerminalGuard;
use crate::theme;

const POLL_INTERVAL: Duration = Duration::from_millis(100);
const NAV_ROWS: u16 = (views::NAV_HEIGHT / LINE_HEIGHT) as u16;
const LINE_STEP: f64 = LINE_HEIGHT;
const WHEEL_STEP: f64 = 3.0 * LINE_HEIGHT;

pub struct App {
    content: PageContent,
    state: PageState,
    scroll_y: f64,
    layout: Option<PageLayout>,
}

impl App {
    pub fn new(content: PageContent) -> Self {
        Self { content, state: PageState::new(), scroll_y: 0.0, layout: None }
    }

    pub fn run(&mut self) -> Result<()> {
        let mut guard = TerminalGuard::enter()?;
        loop {
            let size = guard.terminal_mut().size()?;
            let width = f64::from(size.width).max(40.0);
            let page_rows = size.height.saturating_sub(NAV_ROWS);
            let view_h = f64::from(page_rows) * LINE_HEIGHT;

            let (max_scroll, boxes) = {
                let layout = self.layout_for(width, view_h);
                (layout.max_scroll(view_h), layout.section_boxes().to_vec())
            };
            self.scroll_y = self.scroll_y.clamp(0.0, max_scroll);
            let viewport = Viewport::new(self.scroll_y, width, view_h);
            self.state.observe_scroll(&boxes, &viewport);

            let (page_cmds, nav_cmds, rail_cmds) = {
                let Some(layout) = self.layout.as_ref() else { continue };
                (
                    views::render_page(layout, &viewport, &self.state),
                    views::render_nav(&self.content, &self.state, width),
                    views::render_sidebar(&self.content.links, &viewport),
                )
            };

            let mode = self.state.theme;
            let scroll = self.scroll_y;
            guard.terminal_mut().draw(|frame| {
                let area = frame.area();
                let bg = theme::resolve(ThemeToken::Background, mode);
                frame.render_widget(Block::default().style(Style::default().bg(bg)), area);

                let nav_area = Rect::new(area.x, area.y, area.width, NAV_ROWS.min(area.height));
                let page_area = Rect::new(
                    area.x,
                    area.y + nav_area.height,
                    area.width,
                    area.height.saturating_sub(nav_area.height),
                );
                let buf = frame.buffer_mut();
                renderer::paint(buf, page_area, &page_cmds, mode, scroll);
                renderer::paint(buf, page_area, &rail_cmds, mode, 0.0);
                renderer::paint(buf, nav_area, &nav_cmds, mode, 0.0);
            })?;

            // The boot frame shows the hero easing in; commit it and
            // draw the settled page right away.
            if !self.state.mounted {
                self.state.mark_mounted();
                continue;
            }

            if !event::poll(POLL_INTERVAL)? {
                continue;
            }
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => match key.code {
                    KeyCode::Char('q') | KeyCode::Esc => break,
                    KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                    KeyCode::Char('t') => self.state.toggle_theme(),
                    KeyCode::Down | KeyCode::Char('j') => self.scroll_by(LINE_STEP, max_scroll),
                    KeyCode::Up | KeyCode::Char('k') => self.scroll_by(-LINE_STEP, max_scroll),
                    KeyCode::PageDown | KeyCode::Char(' ') => {
                        self.scroll_by(view_h - LINE_HEIGHT, max_scroll);
                    }
                    KeyCode::PageUp => self.scroll_by(LINE_HEIGHT - view_h, max_scroll),
                    KeyCode::Home | KeyCode::Char('g') => self.scroll_y = 0.0,
                    KeyCode::End | KeyCode::Char('G') => self.scroll_y = max_scroll,
                    KeyCode::Char(ch @ '1'..='4') => {
                        let idx = ch as usize - '1' as usize;
                        if let Some(target) = self.content.nav.get(idx).map(|i| i.target) {
                            self.jump(target, &boxes, max_scroll);
                        }
                    }
                    KeyCode::Char('h') => self.jump(SectionId::Home, &boxes, max_scroll),
                    KeyCode::Char('a') => self.jump(SectionId::About, &boxes, max_scroll),
                    KeyCode::Char('e') => self.jump(SectionId::Experience, &boxes, max_scroll),
                    KeyCode::Char('p') => self.jump(SectionId::Projects, &boxes, max_scroll),
                    KeyCode::Char('c') => self.jump(SectionId::Contact, &boxes, max_scroll),
                    _ => {}
                },
                Event::Mouse(mouse) => match mouse.kind {
                    MouseEventKind::ScrollDown => self.scroll_by(WHEEL_STEP, max_scroll),
                    MouseEventKind::ScrollUp => self.scroll_by(-WHEEL_STEP, max_scroll),
                    _ => {}
                },
                _ => {}
            }
        }
        Ok(())
    }

    fn layout_for(&mut self, width: f64, view_h: f64) -> &PageLayout {
        let stale = self.layout.as_ref().is_some_and(|l| {
            (l.width() - width).abs() > f64::EPSILON
                || (l.view_height() - view_h).abs() > f64::EPSILON
        });
        if stale {
            self.layout = None;
        }
        self.layout.get_or_insert_with(|| PageLayout::compute(&self.content, width, view_h))
    }

    fn scroll_by(&mut self, dy: f64, max_scroll: f64) {
        self.scroll_y = (self.scroll_y + dy).clamp(0.0, max_scroll);
    }

    fn jump(&mut self, id: SectionId, boxes: &[SectionBox], max_scroll: f64) {
        if let Some(b) = boxes.iter().find(|b| b.id == id) {
            self.scroll_y = b.rect.top().clamp(0.0, max_scroll);
        }
    }
}
