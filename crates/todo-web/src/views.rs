//! HTML views.
//!
//! Every page shares one layout with the flash banner on top. All user
//! supplied text goes through [`escape`] before it reaches the markup.
//! Links and form actions use storage positions, which is what the routes
//! address, even when lists are displayed in sorted order.

use axum::http::StatusCode;
use axum::response::Html;
use todo_core::{sort_lists, Flash, TodoList};

/// A page and the data bound to it.
#[derive(Debug, Clone, Copy)]
pub enum View<'a> {
    /// Overview of all lists, incomplete lists first.
    Lists {
        /// Lists in storage order
        lists: &'a [TodoList],
    },

    /// Form for creating a list.
    NewList {
        /// Value to pre-fill, e.g. after a rejected submission
        name: &'a str,
    },

    /// Form for renaming or deleting a list.
    EditList {
        /// Storage position of the list
        index: usize,
        /// The list being edited
        list: &'a TodoList,
        /// Value to pre-fill
        name: &'a str,
    },

    /// One list with its todos.
    List {
        /// Storage position of the list
        index: usize,
        /// The list being shown
        list: &'a TodoList,
    },
}

impl View<'_> {
    /// Short name of the view, used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            View::Lists { .. } => "lists",
            View::NewList { .. } => "new_list",
            View::EditList { .. } => "edit_list",
            View::List { .. } => "list",
        }
    }

    fn title(&self) -> String {
        match self {
            View::Lists { .. } => "Todo Lists".to_string(),
            View::NewList { .. } => "New List".to_string(),
            View::EditList { list, .. } => format!("Editing '{}'", list.name),
            View::List { list, .. } => list.name.clone(),
        }
    }
}

/// Render a view inside the layout, with `flash` shown in the banner.
pub fn render(view: &View<'_>, flash: Option<&Flash>) -> Html<String> {
    let body = match view {
        View::Lists { lists } => lists_body(lists),
        View::NewList { name } => new_list_body(name),
        View::EditList { index, list, name } => edit_list_body(*index, list, name),
        View::List { index, list } => list_body(*index, list),
    };
    Html(layout(&view.title(), flash, &body))
}

/// Render the page shown for a failed request.
pub fn error_page(status: StatusCode, message: &str) -> Html<String> {
    let heading = status.canonical_reason().unwrap_or("Error");
    let body = format!(
        "<section id=\"error\">\n<h2>{} {}</h2>\n<p>{}</p>\n<p><a href=\"/lists\">Back to your lists</a></p>\n</section>\n",
        status.as_u16(),
        escape(heading),
        escape(message),
    );
    Html(layout(heading, None, &body))
}

/// Escape text for use in HTML content and quoted attribute values.
///
/// # Examples
///
/// ```
/// use todo_web::views::escape;
///
/// assert_eq!(escape("<b>\"Tom\" & 'Jerry'</b>"),
///            "&lt;b&gt;&quot;Tom&quot; &amp; &#39;Jerry&#39;&lt;/b&gt;");
/// ```
pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
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

fn class_attr(class: Option<&str>) -> String {
    class
        .map(|class| format!(" class=\"{class}\""))
        .unwrap_or_default()
}

fn layout(title: &str, flash: Option<&Flash>, body: &str) -> String {
    let banner = flash
        .map(|flash| {
            format!(
                "<div class=\"{}\">\n<p>{}</p>\n</div>\n",
                flash.css_class(),
                escape(flash.message())
            )
        })
        .unwrap_or_default();

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{title}</title>
<style>
body {{ font-family: sans-serif; max-width: 40rem; margin: 2rem auto; }}
.flash {{ padding: 0.5rem 1rem; border-radius: 4px; }}
.flash.success {{ background: #e3f6e5; }}
.flash.error {{ background: #fbe3e4; }}
li.complete h3, li.complete .name {{ text-decoration: line-through; color: #888; }}
form.inline {{ display: inline; }}
</style>
</head>
<body>
<header><h1><a href="/lists">Todo Lists</a></h1></header>
<main>
{banner}{body}</main>
</body>
</html>
"#,
        title = escape(title),
    )
}

fn lists_body(lists: &[TodoList]) -> String {
    let mut out = String::from(
        "<section id=\"lists\">\n<h2>Your lists</h2>\n<p><a href=\"/lists/new\">New List</a></p>\n",
    );
    if lists.is_empty() {
        out.push_str("<p>You have no lists yet.</p>\n");
    } else {
        out.push_str("<ul>\n");
        for (index, list) in sort_lists(lists) {
            out.push_str(&format!(
                "<li{}><a href=\"/lists/{index}\"><h3>{}</h3><p>{} / {}</p></a></li>\n",
                class_attr(list.css_class()),
                escape(&list.name),
                list.remaining_count(),
                list.todos_count(),
            ));
        }
        out.push_str("</ul>\n");
    }
    out.push_str("</section>\n");
    out
}

fn new_list_body(name: &str) -> String {
    format!(
        r#"<section id="new-list">
<h2>Create a new list</h2>
<form action="/lists" method="post">
<label for="list_name">Enter the name for your new list:</label>
<input id="list_name" name="list_name" placeholder="List Name" type="text" value="{}">
<button type="submit">Save</button>
<a href="/lists">Cancel</a>
</form>
</section>
"#,
        escape(name)
    )
}

fn edit_list_body(index: usize, list: &TodoList, name: &str) -> String {
    format!(
        r#"<section id="edit-list">
<h2>Edit {}</h2>
<form action="/lists/{index}" method="post">
<label for="new_list_name">Enter the new name for the list:</label>
<input id="new_list_name" name="new_list_name" type="text" value="{}">
<button type="submit">Save</button>
<a href="/lists/{index}">Cancel</a>
</form>
<form action="/lists/{index}/delete" method="post">
<button type="submit">Delete List</button>
</form>
</section>
"#,
        escape(&list.name),
        escape(name),
    )
}

fn list_body(index: usize, list: &TodoList) -> String {
    let mut out = format!(
        "<section id=\"todos\"{}>\n<header>\n<h2>{}</h2>\n<p>{} / {} remaining</p>\n<a href=\"/lists/{index}/edit\">Edit List</a>\n<form class=\"inline\" action=\"/lists/{index}/complete_all\" method=\"post\"><button type=\"submit\">Complete All</button></form>\n</header>\n",
        class_attr(list.css_class()),
        escape(&list.name),
        list.remaining_count(),
        list.todos_count(),
    );

    out.push_str("<ul>\n");
    for (todo_index, todo) in list.todos.iter().enumerate() {
        let (class, toggle_to, label) = if todo.completed {
            (Some("complete"), "false", "Mark uncompleted")
        } else {
            (None, "true", "Mark completed")
        };
        out.push_str(&format!(
            "<li{}>\n<form class=\"inline\" action=\"/lists/{index}/todos/{todo_index}\" method=\"post\"><input type=\"hidden\" name=\"completed\" value=\"{toggle_to}\"><button type=\"submit\">{label}</button></form>\n<span class=\"name\">{}</span>\n<form class=\"inline\" action=\"/lists/{index}/todos/{todo_index}/delete\" method=\"post\"><button type=\"submit\">Delete</button></form>\n</li>\n",
            class_attr(class),
            escape(&todo.name),
        ));
    }
    out.push_str("</ul>\n");

    out.push_str(&format!(
        r#"<form action="/lists/{index}/todos" method="post">
<label for="todo">Enter a new todo item:</label>
<input id="todo" name="todo" placeholder="Something to do" type="text">
<button type="submit">Add</button>
</form>
<p><a href="/lists">All Lists</a></p>
</section>
"#
    ));
    out
}
