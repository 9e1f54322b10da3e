use eframe::egui::{self, RichText, Rounding};

use crate::feed::{quick_actions, HomeTab};
use crate::models::FeedPost;
use crate::theme;

use super::super::state::{ImageState, ModalContent};
use super::super::SereneApp;
use super::card::{card, remote_image};

/// Pill-shaped tab selector.
pub fn modern_tab_button(ui: &mut egui::Ui, tab: HomeTab, selected: bool) -> egui::Response {
    let (fill, text_color) = if selected {
        (theme::ACCENT, egui::Color32::WHITE)
    } else {
        (theme::ACCENT_SOFT, theme::TEXT_MUTED)
    };
    let text = RichText::new(format!("{} {}", tab.icon(), tab.label()))
        .color(text_color)
        .strong();
    ui.add(
        egui::Button::new(text)
            .fill(fill)
            .rounding(Rounding::same(18.0))
            .min_size(egui::vec2(140.0, 34.0)),
    )
}

enum PostAction {
    Like,
    Repost,
}

fn feed_post(
    ui: &mut egui::Ui,
    post: &FeedPost,
    images: &ImageState,
    needs_image: &mut Vec<String>,
) -> Option<PostAction> {
    let mut action = None;
    card(ui, |ui| {
        ui.horizontal(|ui| {
            ui.label(RichText::new(&post.user).strong());
            ui.label(RichText::new(&post.timestamp).small().color(theme::TEXT_MUTED));
        });
        ui.label(&post.content);
        if let Some(url) = &post.image {
            let width = ui.available_width().min(360.0);
            if remote_image(ui, images, url, egui::vec2(width, width * 0.5)) {
                needs_image.push(url.clone());
            }
        }
        ui.horizontal(|ui| {
            let heart = if post.is_liked { "♥" } else { "♡" };
            let like_color = if post.is_liked {
                theme::LIKED
            } else {
                theme::TEXT_MUTED
            };
            if ui
                .add(egui::Button::new(
                    RichText::new(format!("{heart} {}", post.likes)).color(like_color),
                ))
                .clicked()
            {
                action = Some(PostAction::Like);
            }
            let repost_color = if post.is_reposted {
                theme::REPOSTED
            } else {
                theme::TEXT_MUTED
            };
            if ui
                .add(egui::Button::new(
                    RichText::new(format!("🔁 {}", post.reposts)).color(repost_color),
                ))
                .clicked()
            {
                action = Some(PostAction::Repost);
            }
        });
    });
    action
}

impl SereneApp {
    pub(crate) fn render_tabs(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            for tab in HomeTab::ALL {
                if modern_tab_button(ui, tab, self.tab == tab).clicked() {
                    self.tab = tab;
                }
            }
        });
        ui.add_space(8.0);

        match self.tab {
            HomeTab::QuickActions => self.render_quick_actions(ui),
            HomeTab::CommunityFeed => self.render_community_feed(ui),
        }
    }

    fn render_quick_actions(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("quick_actions_grid")
            .num_columns(2)
            .spacing([10.0, 10.0])
            .show(ui, |ui| {
                for (index, action) in quick_actions().iter().enumerate() {
                    let text = RichText::new(format!("{}  {}", action.icon, action.title)).size(16.0);
                    let button = egui::Button::new(text)
                        .fill(theme::CARD)
                        .rounding(Rounding::same(theme::CARD_ROUNDING))
                        .min_size(egui::vec2(160.0, 56.0));
                    if ui.add(button).clicked() {
                        self.modal = Some(ModalContent::QuickAction(action));
                    }
                    if index % 2 == 1 {
                        ui.end_row();
                    }
                }
            });
    }

    fn render_community_feed(&mut self, ui: &mut egui::Ui) {
        let mut needs_image = Vec::new();
        let mut toggled: Option<(String, PostAction)> = None;

        for post in self.feed.posts() {
            if let Some(action) = feed_post(ui, post, &self.images, &mut needs_image) {
                toggled = Some((post.id.clone(), action));
            }
            ui.add_space(6.0);
        }

        match toggled {
            Some((id, PostAction::Like)) => {
                self.feed.toggle_like(&id);
            }
            Some((id, PostAction::Repost)) => {
                self.feed.toggle_repost(&id);
            }
            None => {}
        }
        for url in needs_image {
            self.spawn_load_image(&url);
        }
    }
}
