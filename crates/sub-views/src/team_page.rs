//! Team management page
//!
//! Renders the student-facing page for one gradeable: current team roster,
//! pending and received invitations, the repository clone command, and the
//! invite/leave/create/seek controls. The view is a single-pass template
//! over immutable snapshots; all data access happens before the call and
//! all member ids resolve through the injected [`UserLookup`].
//!
//! An unresolvable member id renders an explicit placeholder rather than
//! failing the whole page.

use sub_core::config::CourseConfig;
use sub_models::{Gradeable, Team, UserLookup};

use crate::html::escape;
use crate::url::ActionUrlBuilder;
use crate::vcs::{repository_url, RepoUrlFields};

/// jQuery handler shared by both "Users Seeking Team/Partner" toggle buttons
const SEEKING_TOGGLE_BUTTON: &str = "<button class=\"btn btn-default\" style=\"float:right\" \
     onclick=\"$('.popup-form').css('display', 'none');\
$('#users_seeking_team_show').css('display', 'block');\">\
Users Seeking Team/Partner</button>";

/// Team management page view
pub struct TeamPageView<'a> {
    config: &'a CourseConfig,
    user_id: &'a str,
    users: &'a dyn UserLookup,
    urls: ActionUrlBuilder,
}

impl<'a> TeamPageView<'a> {
    /// Build a view for the acting user in the given course.
    pub fn new(config: &'a CourseConfig, user_id: &'a str, users: &'a dyn UserLookup) -> Self {
        let urls = ActionUrlBuilder::new(config);
        Self {
            config,
            user_id,
            users,
            urls,
        }
    }

    /// Render the page body for one gradeable.
    ///
    /// `teams` is every team on the gradeable (scanned for invitations sent
    /// to the acting user), `locked` freezes membership changes, and
    /// `users_seeking_team` lists the ids shown in the seeking panel.
    pub fn render(
        &self,
        gradeable: &Gradeable,
        teams: &[Team],
        locked: bool,
        users_seeking_team: &[String],
    ) -> String {
        tracing::debug!(
            gradeable = %gradeable.id,
            has_team = gradeable.team.is_some(),
            locked,
            "rendering team page"
        );

        let mut out = String::new();
        out.push_str("<div class=\"content\">\n");
        out.push_str(&format!(
            "    <h2>Manage Team For: {}</h2>\n",
            escape(&gradeable.name)
        ));

        if locked {
            self.render_locked_notice(&mut out, gradeable.team.is_some());
        }

        match &gradeable.team {
            Some(team) => {
                self.render_members(&mut out, team);
                if !team.invitations.is_empty() {
                    self.render_pending_invitations(&mut out, gradeable, team, locked);
                }
                if gradeable.is_repository {
                    self.render_repository(&mut out, gradeable, team);
                }
            }
            None => out.push_str("    <h4>You are not on a team.</h4> <br />\n"),
        }
        out.push_str("</div>\n");

        match &gradeable.team {
            Some(_) if !locked => self.render_team_controls(&mut out, gradeable),
            Some(_) => {}
            None => self.render_no_team_controls(&mut out, gradeable, teams, users_seeking_team),
        }

        self.render_seeking_panel(&mut out, users_seeking_team);
        out
    }

    fn render_locked_notice(&self, out: &mut String, has_team: bool) {
        if has_team {
            out.push_str(
                "    <p class=\"red-message\">\n\
                 \x20   Teams are now locked for this assignment.<br>\n\
                 \x20   Contact your instructor to make changes to your team.\n\
                 \x20   </p><br />\n",
            );
        } else {
            out.push_str(
                "    <p class=\"red-message\">\n\
                 \x20   Teams are now locked for this assignment.<br>\n\
                 \x20   You can create a new team of 1 or accept an invitation sent before teams \
                 were locked.<br>\n\
                 \x20   Contact your instructor to make further changes to your team.\n\
                 \x20   </p><br />\n",
            );
        }
    }

    fn render_members(&self, out: &mut String, team: &Team) {
        out.push_str("    <h3>Your Team:</h3> <br />\n");
        for member_id in &team.members {
            let line = match self.users.user_by_id(member_id) {
                Some(user) => format!(
                    "{} {} ({}) - {}",
                    escape(user.displayed_first_name()),
                    escape(&user.lastname),
                    escape(&user.id),
                    escape(&user.email)
                ),
                None => format!("Unknown User ({})", escape(member_id)),
            };
            out.push_str(&format!("        <span>&emsp;{}</span> <br />\n", line));
        }
    }

    fn render_pending_invitations(
        &self,
        out: &mut String,
        gradeable: &Gradeable,
        team: &Team,
        locked: bool,
    ) {
        out.push_str("    <br />\n    <h3>Pending Invitations:</h3> <br />\n");
        for invited in &team.invitations {
            if locked {
                out.push_str(&format!(
                    "    <span>&emsp;{}</span> <br />\n",
                    escape(invited)
                ));
            } else {
                let cancel_url = self.urls.team_action(&gradeable.id, "cancel");
                out.push_str(&format!(
                    "    <form action=\"{}\" method=\"post\">\n\
                     \x20       <input type=\"hidden\" name=\"cancel_id\" value=\"{}\" />\n\
                     \x20       &emsp;{}: <input type=\"submit\" value=\"Cancel\" \
                     class=\"btn btn-danger\" />\n\
                     \x20   </form><br />\n",
                    escape(&cancel_url),
                    escape(invited),
                    escape(invited)
                ));
            }
        }
    }

    fn render_repository(&self, out: &mut String, gradeable: &Gradeable, team: &Team) {
        let repo = repository_url(
            self.config,
            gradeable,
            RepoUrlFields {
                gradeable_id: &gradeable.id,
                user_id: self.user_id,
                team_id: &team.id,
            },
        );
        out.push_str(
            "    <br />\n\
             \x20   <h3>To access your Team Repository:</h3>\n\
             \x20   <span>\n\
             <em>Note: There may be a delay before your repository is prepared, \
             please refer to assignment instructions.</em>\n\
             \x20   <br />\n\
             \x20   <br />\n",
        );
        out.push_str(&format!(
            "<samp>git  clone  {}  SPECIFY_TARGET_DIRECTORY</samp>\n",
            escape(&repo)
        ));
        out.push_str("    </span> <br />\n");
    }

    fn render_team_controls(&self, out: &mut String, gradeable: &Gradeable) {
        let invite_url = self.urls.team_action(&gradeable.id, "invitation");
        let leave_url = self.urls.team_action(&gradeable.id, "leave_team");

        out.push_str("<div class=\"content\">\n");
        out.push_str("    <h3>Invite new teammates by their user ID:</h3>\n    <br />\n");
        out.push_str(&format!(
            "    <form action=\"{}\" method=\"post\">\n\
             \x20       <input type=\"text\" name=\"invite_id\" placeholder=\"User ID\" />\n\
             \x20       <input type=\"submit\" value=\"Invite\" class=\"btn btn-primary\" />\n\
             \x20   </form>\n\
             \x20   <br />\n",
            escape(&invite_url)
        ));
        out.push_str(&format!(
            "    <button class=\"btn btn-danger\" onclick=\"location.href='{}'\">\
             Leave Team</button>\n",
            escape(&leave_url)
        ));
        out.push_str(&format!("    {}\n", SEEKING_TOGGLE_BUTTON));
        out.push_str("</div>\n");
    }

    fn render_no_team_controls(
        &self,
        out: &mut String,
        gradeable: &Gradeable,
        teams: &[Team],
        users_seeking_team: &[String],
    ) {
        let invites_received: Vec<&Team> = teams
            .iter()
            .filter(|team| team.sent_invite(self.user_id))
            .collect();

        out.push_str("<div class=\"content\">\n");
        if invites_received.is_empty() {
            out.push_str("    <h4>You have not received any invitations.</h4> <br />\n");
        } else {
            out.push_str("    <h3>Invitations:</h3> <br />\n");
            let accept_url = self.urls.team_action(&gradeable.id, "accept");
            for invite in invites_received {
                out.push_str(&format!(
                    "    <form action=\"{}\" method=\"post\">\n\
                     \x20       <input type=\"hidden\" name=\"team_id\" value=\"{}\" />\n\
                     \x20       &emsp;{}: <input type=\"submit\" value=\"Accept\" \
                     class=\"btn btn-success\" />\n\
                     \x20   </form>\n\
                     \x20   <br />\n",
                    escape(&accept_url),
                    escape(&invite.id),
                    escape(&invite.member_list())
                ));
            }
        }

        let create_url = self.urls.team_action(&gradeable.id, "create_new_team");
        out.push_str(&format!(
            "    <br />\n\
             \x20   <button class=\"btn btn-primary\" onclick=\"location.href='{}'\">\
             Create New Team</button>\n",
            escape(&create_url)
        ));
        if !users_seeking_team.iter().any(|seeking| seeking == self.user_id) {
            let seek_url = self.urls.team_action(&gradeable.id, "seek_team");
            out.push_str(&format!(
                "    &nbsp;or&nbsp;<button class=\"btn btn-primary\" \
                 onclick=\"location.href='{}'\">Seek Team/Partner</button>\n",
                escape(&seek_url)
            ));
        }
        out.push_str(&format!("    {}\n", SEEKING_TOGGLE_BUTTON));
        out.push_str("</div>\n");
    }

    fn render_seeking_panel(&self, out: &mut String, users_seeking_team: &[String]) {
        out.push_str(
            "<div class=\"popup-form\" id=\"users_seeking_team_show\" style=\"width:420px\">\n\
             \x20   <center><h3>Users seeking team/partner-</h3></center><br />\n\
             \x20   <form>\n",
        );
        for seeking in users_seeking_team {
            out.push_str(&format!(
                "        <center><input class=\"readonly\" type=\"text\" \
                 readonly=\"readonly\" value=\"{}\" /></center><br />\n",
                escape(seeking)
            ));
        }
        if users_seeking_team.is_empty() {
            out.push_str("        <center>no one seeking team/partner right now</center><br />\n");
        }
        out.push_str(
            "        <a style=\"float:right\" \
             onclick=\"$('#users_seeking_team_show').css('display', 'none');\" \
             class=\"btn btn-danger\">Back</a>\n\
             \x20   </form>\n\
             </div>\n",
        );
    }
}
