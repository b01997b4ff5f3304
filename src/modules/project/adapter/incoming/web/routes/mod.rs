mod get_projects;
mod get_single_project;

pub use get_projects::{
    __path_get_featured_projects_handler, __path_get_projects_handler,
    get_featured_projects_handler, get_projects_handler,
};
pub use get_single_project::{__path_get_project_by_id_handler, get_project_by_id_handler};
