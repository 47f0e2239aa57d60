//! Line-oriented host for the designer.
//!
//! Plays the part of the project page: it owns the project form, opens the
//! designer over it and turns text commands into designer actions.

use anyhow::{anyhow, bail};
use mestri_core::{convert_area, format_area, AreaUnit, LayoutError, ProjectForm};
use mestri_designer::{DesignerController, Point, RoomField, RoomId};
use mestri_settings::Config;

const HELP: &str = "\
Commands:
  open                          show the designer
  close                         hide the designer (rooms are kept)
  add <category>                add a room, e.g. 'add bedroom'
  set <id> <length|width> <ft>  edit a room dimension
  remove <id>                   delete a room
  down <x> <y>                  pointer down on the canvas (page px)
  move <x> <y>                  pointer move (page px)
  up                            pointer up
  drag <id> <x> <y>             drag a room so its top-left lands at (x, y)
  list                          show the room list
  canvas                        show the canvas rectangles
  stats                         show the total area
  save                          apply the layout to the project form
  form <field> <value>          set area, floors, budget, timeline, complexity or facing
  plan                          print the plan request JSON
  help                          show this message
  quit                          exit";

/// Result of one shell command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    Output(String),
    Quit,
}

/// The designer together with the form it writes into.
#[derive(Debug)]
pub struct Shell {
    designer: DesignerController,
    form: ProjectForm,
    palette: Vec<String>,
}

impl Shell {
    pub fn new(config: &Config) -> Self {
        Self {
            designer: DesignerController::new(&config.designer),
            form: ProjectForm::new(),
            palette: config.designer.palette.clone(),
        }
    }

    /// Runs one command line.
    pub fn execute(&mut self, line: &str) -> anyhow::Result<Reply> {
        let mut words = line.split_whitespace();
        let Some(command) = words.next() else {
            return Ok(Reply::Output(String::new()));
        };
        let args: Vec<&str> = words.collect();

        let output = match (command, args.as_slice()) {
            ("help", _) => HELP.to_string(),
            ("quit" | "exit", _) => return Ok(Reply::Quit),
            ("open", []) => {
                self.designer.open();
                self.designer.list_view().to_text()
            }
            ("close", []) => {
                self.designer.close();
                "Designer closed".to_string()
            }
            ("add", []) => bail!("add needs a category: {}", self.palette.join(", ")),
            ("add", category) => {
                let category = category.join(" ");
                if !self.palette.contains(&category) {
                    tracing::debug!("Adding room outside the palette: {}", category);
                }
                let room = self.designer.add_room(&category);
                format!("Added {}", room.label())
            }
            ("set", [id, field, value @ ..]) => {
                let id = parse_id(id)?;
                let field: RoomField = field.parse()?;
                self.designer.edit_room(id, field, &value.join(" "));
                self.designer.list_view().to_text()
            }
            ("remove", [id]) => {
                let id = parse_id(id)?;
                self.designer.remove_room(id);
                self.designer.list_view().to_text()
            }
            ("down", [x, y]) => {
                let page = parse_point(x, y)?;
                match self.designer.pointer_down(page) {
                    Some(id) => format!("Grabbed room {}", id),
                    None => format!("No room at ({}, {})", page.x, page.y),
                }
            }
            ("move", [x, y]) => {
                let page = parse_point(x, y)?;
                match self.designer.pointer_move(page) {
                    Some(rect) => format!(
                        "Room {} at ({}, {})",
                        rect.id, rect.position.x, rect.position.y
                    ),
                    None => "Not dragging".to_string(),
                }
            }
            ("up", []) => {
                self.designer.pointer_up();
                "Released".to_string()
            }
            ("drag", [id, x, y]) => {
                let id = parse_id(id)?;
                let target = parse_point(x, y)?;
                self.drag_room(id, target)?
            }
            ("list", []) => self.designer.list_view().to_text(),
            ("canvas", []) => self.designer.canvas_view().to_text(),
            ("stats", []) => {
                let total = self.designer.store().total_area();
                format!(
                    "Total area: {} ({})",
                    format_area(total, AreaUnit::SqFeet),
                    format_area(
                        convert_area(total, AreaUnit::SqFeet, AreaUnit::SqYards),
                        AreaUnit::SqYards
                    )
                )
            }
            ("save", []) => {
                let outcome = self.designer.save(&mut self.form);
                format!(
                    "Applied {} rooms, {} sqft to the project form",
                    outcome.layout.len(),
                    outcome.total_area
                )
            }
            ("form", [field, value @ ..]) => {
                self.form.set_field(field, &value.join(" "))?;
                format!("{} = {}", field, value.join(" "))
            }
            ("plan", []) => self.form.to_request()?.to_json()?,
            _ => bail!("unknown command '{}', try 'help'", line.trim()),
        };

        Ok(Reply::Output(output))
    }

    /// Runs a full drag gesture on `id`, grabbing the room by its centre.
    fn drag_room(&mut self, id: RoomId, target: Point) -> anyhow::Result<String> {
        let rect = self
            .designer
            .canvas_view()
            .rects()
            .iter()
            .find(|r| r.id == id)
            .cloned()
            .ok_or_else(|| anyhow!("no room {}", id))?;

        let grab = Point::new(rect.size.width / 2.0, rect.size.height / 2.0);
        let viewport = *self.designer.canvas_view().viewport();
        let start = viewport.canvas_to_page(rect.position + grab);

        match self.designer.pointer_down(start) {
            Some(grabbed) if grabbed == id => {}
            other => {
                self.designer.pointer_up();
                match other {
                    Some(covering) => bail!("room {} is covered by room {}", id, covering),
                    None => bail!("room {} cannot be grabbed", id),
                }
            }
        }

        let moved = self
            .designer
            .pointer_move(viewport.canvas_to_page(target + grab))
            .map(|r| r.position);
        self.designer.pointer_up();

        let position = moved.ok_or_else(|| anyhow!("room {} vanished mid-drag", id))?;
        Ok(format!("Room {} at ({}, {})", id, position.x, position.y))
    }

    pub fn designer(&self) -> &DesignerController {
        &self.designer
    }

    pub fn form(&self) -> &ProjectForm {
        &self.form
    }
}

fn parse_id(raw: &str) -> Result<RoomId, LayoutError> {
    raw.parse().map_err(|_| LayoutError::InvalidRoomId {
        value: raw.to_string(),
    })
}

fn parse_point(x: &str, y: &str) -> Result<Point, LayoutError> {
    let coordinate = |raw: &str| {
        raw.parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| LayoutError::InvalidCoordinate {
                value: raw.to_string(),
            })
    };
    Ok(Point::new(coordinate(x)?, coordinate(y)?))
}
