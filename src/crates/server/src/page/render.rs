use application::query::artist_query::{SortField, SortOrder};
use application::query::render::{PageRenderer, RenderError};
use application::query::view::ArtistsView;
use domain::artist::Artist;
use infra::config::PageConfig;
use log::info;
use std::fmt::Write;

/// 内置页面布局
pub const DEFAULT_LAYOUT: &str = include_str!("../../resources/layout.html");

pub const SLOT_FILTERS: &str = "{{filters}}";
pub const SLOT_SUGGESTIONS: &str = "{{suggestions}}";
pub const SLOT_ARTISTS: &str = "{{artists}}";

/// 成员数量复选框的上限
const MAX_MEMBER_CHOICES: usize = 8;

const SORT_FIELDS: [(SortField, &str); 4] = [
    (SortField::Name, "Name"),
    (SortField::CreationDate, "Creation date"),
    (SortField::FirstAlbum, "First album"),
    (SortField::Country, "Country"),
];

const SORT_ORDERS: [(SortOrder, &str); 3] = [
    (SortOrder::Unspecified, "Default"),
    (SortOrder::Asc, "Ascending"),
    (SortOrder::Desc, "Descending"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Slot {
    Filters,
    Suggestions,
    Artists,
}

impl Slot {
    const ALL: [Slot; 3] = [Slot::Filters, Slot::Suggestions, Slot::Artists];

    fn token(self) -> &'static str {
        match self {
            Slot::Filters => SLOT_FILTERS,
            Slot::Suggestions => SLOT_SUGGESTIONS,
            Slot::Artists => SLOT_ARTISTS,
        }
    }
}

/// 布局片段：原样输出的文本或待填充的插槽
#[derive(Debug, Clone, PartialEq)]
enum Piece {
    Text(String),
    Slot(Slot),
}

/// 将布局按插槽切分，只在加载时扫描一次
fn split_layout(layout: &str) -> Vec<Piece> {
    let mut pieces = Vec::new();
    let mut rest = layout;
    loop {
        let next = Slot::ALL
            .iter()
            .filter_map(|slot| rest.find(slot.token()).map(|pos| (pos, *slot)))
            .min_by_key(|(pos, _)| *pos);
        match next {
            Some((pos, slot)) => {
                if pos > 0 {
                    pieces.push(Piece::Text(rest[..pos].to_string()));
                }
                pieces.push(Piece::Slot(slot));
                rest = &rest[pos + slot.token().len()..];
            }
            None => {
                if !rest.is_empty() {
                    pieces.push(Piece::Text(rest.to_string()));
                }
                return pieces;
            }
        }
    }
}

/// 基于布局模板的 HTML 渲染器
///
/// 布局中的 `{{filters}}`、`{{artists}}` 必须存在，`{{suggestions}}` 可选。
#[derive(Debug, Clone)]
pub struct HtmlPageRenderer {
    pieces: Vec<Piece>,
}

impl HtmlPageRenderer {
    pub fn from_layout(layout: impl AsRef<str>) -> Result<Self, RenderError> {
        let pieces = split_layout(layout.as_ref());
        for slot in [Slot::Filters, Slot::Artists] {
            if !pieces.contains(&Piece::Slot(slot)) {
                return Err(RenderError::MissingSlot(slot.token()));
            }
        }
        Ok(Self { pieces })
    }

    /// 从配置加载布局，布局文件不存在时使用内置布局
    pub fn load(cfg: &PageConfig) -> Result<Self, RenderError> {
        match cfg.layout_file() {
            Some(path) => {
                let layout = std::fs::read_to_string(&path)
                    .map_err(|e| RenderError::Layout(format!("{}: {}", path.display(), e)))?;
                info!("Using page layout {}", path.display());
                Self::from_layout(layout)
            }
            None => {
                info!(
                    "Page layout '{}' not found, using built-in layout",
                    cfg.layout_path
                );
                Self::from_layout(DEFAULT_LAYOUT)
            }
        }
    }

    fn render_filters(&self, view: &ArtistsView) -> Result<String, RenderError> {
        let query = &view.query;
        let mut out = String::new();

        writeln!(out, r#"<form method="get" action="/" class="filters">"#)?;
        writeln!(
            out,
            r#"  <input type="search" name="searchQuery" list="suggestions" placeholder="Artist or member" value="{}">"#,
            escape(&view.artist_search)
        )?;
        writeln!(
            out,
            r#"  <input type="search" name="memberSearch" placeholder="Member" value="{}">"#,
            escape(&view.member_search)
        )?;
        writeln!(
            out,
            r#"  <label>Created from <input type="number" name="minYear" value="{}"></label>"#,
            query.min_year
        )?;
        writeln!(
            out,
            r#"  <label>to <input type="number" name="maxYear" value="{}"></label>"#,
            query.max_year
        )?;

        writeln!(out, r#"  <fieldset class="members"><legend>Members</legend>"#)?;
        for count in 1..=MAX_MEMBER_CHOICES {
            writeln!(
                out,
                r#"    <label><input type="checkbox" name="numMembers" value="{0}"{1}> {0}</label>"#,
                count,
                checked(query.accepts_member_count(count))
            )?;
        }
        writeln!(out, "  </fieldset>")?;

        writeln!(out, r#"  <select name="country">"#)?;
        writeln!(out, r#"    <option value="">All countries</option>"#)?;
        for country in &view.countries {
            writeln!(
                out,
                r#"    <option value="{0}"{1}>{0}</option>"#,
                escape(country),
                selected(*country == query.country)
            )?;
        }
        writeln!(out, "  </select>")?;

        writeln!(out, r#"  <select name="sortBy">"#)?;
        for (field, label) in SORT_FIELDS {
            writeln!(
                out,
                r#"    <option value="{}"{}>{}</option>"#,
                field.as_str(),
                selected(field == query.sort_by),
                label
            )?;
        }
        writeln!(out, "  </select>")?;

        writeln!(out, r#"  <select name="orderBy">"#)?;
        for (order, label) in SORT_ORDERS {
            writeln!(
                out,
                r#"    <option value="{}"{}>{}</option>"#,
                order.as_str(),
                selected(order == query.order_by),
                label
            )?;
        }
        writeln!(out, "  </select>")?;

        writeln!(out, r#"  <button type="submit">Apply</button>"#)?;
        writeln!(out, r#"  <a href="/" class="reset">Reset</a>"#)?;
        writeln!(out, "</form>")?;
        Ok(out)
    }

    fn render_suggestions(&self, view: &ArtistsView) -> Result<String, RenderError> {
        let mut out = String::new();
        writeln!(out, r#"<datalist id="suggestions">"#)?;
        for name in &view.artist_names {
            writeln!(out, r#"  <option value="{}">artist</option>"#, escape(name))?;
        }
        for member in &view.artist_members {
            writeln!(out, r#"  <option value="{}">member</option>"#, escape(member))?;
        }
        for year in &view.artist_creation {
            writeln!(out, r#"  <option value="{}">creation date</option>"#, year)?;
        }
        writeln!(out, "</datalist>")?;
        Ok(out)
    }

    fn render_artists(&self, view: &ArtistsView) -> Result<String, RenderError> {
        let mut out = String::new();
        if view.artists.is_empty() {
            writeln!(
                out,
                r#"<p class="empty">No artists match the current filters.</p>"#
            )?;
            return Ok(out);
        }

        writeln!(
            out,
            r#"<p class="count">{} artist(s)</p>"#,
            view.artists.len()
        )?;
        writeln!(out, r#"<section class="artists">"#)?;
        for artist in &view.artists {
            self.render_artist(&mut out, artist, view)?;
        }
        writeln!(out, "</section>")?;
        Ok(out)
    }

    fn render_artist(
        &self,
        out: &mut String,
        artist: &Artist,
        view: &ArtistsView,
    ) -> Result<(), RenderError> {
        let name = escape(&artist.name);
        writeln!(out, r#"  <article class="artist">"#)?;
        writeln!(
            out,
            r#"    <img src="{}" alt="{}" loading="lazy">"#,
            escape(&artist.image),
            name
        )?;
        writeln!(out, "    <h2>{}</h2>", name)?;
        writeln!(
            out,
            r#"    <p class="meta">Created {} &middot; First album {}</p>"#,
            artist.creation_date,
            escape(&artist.first_album)
        )?;

        writeln!(out, r#"    <ul class="members">"#)?;
        for member in &artist.members {
            writeln!(out, "      <li>{}</li>", escape(member))?;
        }
        writeln!(out, "    </ul>")?;

        if let Some(relation) = view.relations.find_by_id(artist.id) {
            if !relation.dates_locations.is_empty() {
                writeln!(out, r#"    <details class="concerts"><summary>Concerts</summary>"#)?;
                writeln!(out, "      <ul>")?;
                for (location, dates) in &relation.dates_locations {
                    writeln!(
                        out,
                        "        <li><strong>{}</strong>: {}</li>",
                        escape(location),
                        escape(&dates.join(", "))
                    )?;
                }
                writeln!(out, "      </ul>")?;
                writeln!(out, "    </details>")?;
            }
        }

        writeln!(out, "  </article>")?;
        Ok(())
    }
}

impl PageRenderer for HtmlPageRenderer {
    fn render(&self, view: &ArtistsView) -> Result<String, RenderError> {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Text(text) => out.push_str(text),
                Piece::Slot(Slot::Filters) => out.push_str(&self.render_filters(view)?),
                Piece::Slot(Slot::Suggestions) => out.push_str(&self.render_suggestions(view)?),
                Piece::Slot(Slot::Artists) => out.push_str(&self.render_artists(view)?),
            }
        }
        Ok(out)
    }
}

fn checked(on: bool) -> &'static str {
    if on {
        " checked"
    } else {
        ""
    }
}

fn selected(on: bool) -> &'static str {
    if on {
        " selected"
    } else {
        ""
    }
}

/// HTML 转义
pub fn escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
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
