//! Who may open which route.
//!
//! Pages outside `/dashboard` are public. Every dashboard page needs a
//! signed-in user, and the role pages additionally need a matching role.
//! Administrators may open every dashboard page. The backend still checks
//! each request; this only decides what the client renders.
//!
//! | Route | Roles |
//! |-------|-------|
//! | `/dashboard` | any signed-in user |
//! | `/dashboard/admin` | administrador |
//! | `/dashboard/student`, `/dashboard/student/interview/:id` | estudiante, administrador |
//! | `/dashboard/professional` | profesional, administrador |
//! | `/dashboard/patient` | paciente, administrador |

use api::{Role, UserInfo};

use crate::Route;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Granted,
    /// Nobody is signed in.
    SignIn,
    /// Signed in with a role that may not open the route.
    Forbidden,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Rule {
    Public,
    SignedIn,
    Roles(&'static [Role]),
}

fn rule(route: &Route) -> Rule {
    match route {
        Route::Dashboard {} => Rule::SignedIn,
        Route::AdminDash {} => Rule::Roles(&[Role::Admin]),
        Route::StudentDash {} | Route::Interview { .. } => Rule::Roles(&[Role::Student, Role::Admin]),
        Route::ProfessionalDash {} => Rule::Roles(&[Role::Professional, Role::Admin]),
        Route::PatientDash {} => Rule::Roles(&[Role::Patient, Role::Admin]),
        Route::Home {}
        | Route::Single { .. }
        | Route::Demo {}
        | Route::Register { .. }
        | Route::Login {}
        | Route::NotFound { .. } => Rule::Public,
    }
}

pub fn access(route: &Route, user: Option<&UserInfo>) -> Access {
    match (rule(route), user) {
        (Rule::Public, _) => Access::Granted,
        (_, None) => Access::SignIn,
        (Rule::SignedIn, Some(_)) => Access::Granted,
        (Rule::Roles(roles), Some(user)) if roles.contains(&user.role) => Access::Granted,
        (Rule::Roles(_), Some(_)) => Access::Forbidden,
    }
}

/// The dashboard a role lands on from `/dashboard`.
pub fn home_for(role: Role) -> Option<Route> {
    match role {
        Role::Admin => Some(Route::AdminDash {}),
        Role::Student => Some(Route::StudentDash {}),
        Role::Professional => Some(Route::ProfessionalDash {}),
        Role::Patient => Some(Route::PatientDash {}),
        Role::Unknown => None,
    }
}
