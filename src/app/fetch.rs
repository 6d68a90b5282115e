use eframe::egui;

use super::rt;
use crate::api;

/// Messages for sprite loading.
pub enum SpriteMsg {
    Ok {
        id: u32,
        w: usize,
        h: usize,
        rgba: Vec<u8>,
    },
    Err {
        id: u32,
    },
}

impl super::DeckApp {
    /// Start the aggregate fetch: the listing plus one detail request per
    /// entry, published as a single all-or-nothing result.
    pub(super) fn start_fetch(&mut self, ctx: &egui::Context) {
        self.net.loading = true;
        // Reset last state so the UI shows the spinner and clears any error
        self.net.last_error = None;
        self.net.catalog = None;
        ctx.request_repaint();

        // bump fetch request id; older in-flight results become stale
        self.net.counter = self.net.counter.wrapping_add(1);
        let req_id = self.net.counter;

        let tx = self.net.tx.clone();
        let ctx2 = ctx.clone();
        rt().spawn(async move {
            let res = api::fetch_catalog(api::CATALOG_LIMIT).await;
            if let Err(err) = &res {
                log::error!("catalog fetch failed: {err}");
            }
            let _ = tx.send((req_id, res));
            ctx2.request_repaint();
        });
    }

    /// Schedule background sprite downloads for entries that have no texture
    /// yet (idempotent; guarded by the loading/failed sets).
    pub(super) fn schedule_sprite_downloads(&mut self, ctx: &egui::Context) {
        let Some(catalog) = &self.net.catalog else {
            return;
        };
        let mut targets: Vec<(u32, String)> = Vec::new();
        for p in catalog {
            if self.sprites.textures.contains_key(&p.id)
                || self.sprites.loading.contains(&p.id)
                || self.sprites.failed.contains(&p.id)
            {
                continue;
            }
            let Some(url) = p.sprite_url() else {
                // No raster sprite at all; the card shows its local failure
                log::warn!("no sprite url for {} (id={})", p.name, p.id);
                continue;
            };
            targets.push((p.id, url.to_string()));
        }

        for (id, url) in targets {
            self.sprites.loading.insert(id);
            let tx = self.sprites.tx.clone();
            let ctx2 = ctx.clone();
            rt().spawn(async move {
                let msg = match api::fetch_sprite(&url).await {
                    Ok((w, h, rgba)) => SpriteMsg::Ok { id, w, h, rgba },
                    Err(err) => {
                        log::warn!("sprite fetch failed: id={id} err={err} url={url}");
                        SpriteMsg::Err { id }
                    }
                };
                let _ = tx.send(msg);
                ctx2.request_repaint();
            });
        }
    }

    /// Poll incoming async messages and update state accordingly.
    pub(super) fn poll_incoming(&mut self, ctx: &egui::Context) {
        // Aggregate results
        while let Ok((id, res)) = self.net.rx.try_recv() {
            if id != self.net.counter {
                // Stale result from a superseded request
                continue;
            }
            self.net.loading = false;
            match res {
                Ok(catalog) => {
                    log::info!("catalog ready: {} entries", catalog.len());
                    self.net.last_error = None;
                    self.net.catalog = Some(catalog);
                    self.schedule_sprite_downloads(ctx);
                }
                Err(e) => {
                    // All-or-nothing: no partial catalog survives a failure
                    self.net.catalog = None;
                    self.net.last_error = Some(e.to_string());
                }
            }
        }

        // Sprite images
        while let Ok(msg) = self.sprites.rx.try_recv() {
            match msg {
                SpriteMsg::Ok { id, w, h, rgba } => {
                    let image = egui::ColorImage::from_rgba_unmultiplied([w, h], &rgba);
                    let tex = ctx.load_texture(
                        format!("sprite_{id}"),
                        image,
                        egui::TextureOptions::default(),
                    );
                    self.sprites.textures.insert(id, tex);
                    self.sprites.loading.remove(&id);
                    log::debug!("sprite ok: id={id} size={w}x{h}");
                }
                SpriteMsg::Err { id } => {
                    self.sprites.loading.remove(&id);
                    self.sprites.failed.insert(id);
                }
            }
        }
    }
}
