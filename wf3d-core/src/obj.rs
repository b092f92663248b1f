/// Wavefront OBJ parser for vertex positions and polygon faces
///
/// Only `v` and `f` records are read. Texture coordinates, normals, groups,
/// materials and comments are skipped.
use nom::{
    branch::alt,
    bytes::complete::{tag, take_till},
    character::complete::{char, digit1, space0, space1},
    combinator::{eof, map_res, opt, peek},
    multi::many1,
    number::complete::float,
    sequence::preceded,
    IResult,
};
use std::fs;
use std::path::Path;
use tracing::info;

use crate::error::ObjError;
use crate::geometry::{point, Face, Mesh, Vec4};

/// Parse OBJ text into a mesh
pub fn parse_obj(input: &str) -> Result<Mesh, ObjError> {
    let mut vertices = Vec::new();
    let mut faces = Vec::new();

    for (number, line) in input.lines().enumerate() {
        let line = line.trim_start();
        let parse_error = |message: String| ObjError::Parse {
            line: number + 1,
            message,
        };

        match line.split_whitespace().next() {
            Some("v") => {
                let (_, vertex) = parse_vertex(line)
                    .map_err(|_| parse_error(format!("malformed vertex `{}`", line)))?;
                vertices.push(vertex);
            }
            Some("f") => {
                let (_, indices) = parse_face(line)
                    .map_err(|_| parse_error(format!("malformed face `{}`", line)))?;
                if indices.contains(&0) {
                    return Err(parse_error("vertex indices are 1-based, found 0".to_string()));
                }
                faces.push(Face::new(indices.into_iter().map(|i| i - 1).collect()));
            }
            _ => {}
        }
    }

    Ok(Mesh::new(vertices, faces)?)
}

/// Read and parse an OBJ file
pub fn load_obj(path: impl AsRef<Path>) -> Result<Mesh, ObjError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| ObjError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mesh = parse_obj(&text)?;
    info!(
        path = %path.display(),
        vertices = mesh.vertices().len(),
        faces = mesh.faces().len(),
        "loaded OBJ mesh"
    );
    Ok(mesh)
}

fn parse_vertex(input: &str) -> IResult<&str, Vec4> {
    let (input, _) = tag("v")(input)?;
    let (input, x) = coordinate(input)?;
    let (input, y) = coordinate(input)?;
    let (input, z) = coordinate(input)?;
    Ok((input, point(x, y, z)))
}

fn coordinate(input: &str) -> IResult<&str, f32> {
    let (input, _) = space1(input)?;
    let (input, value) = float(input)?;
    let (input, _) = peek(alt((space1, eof)))(input)?;
    Ok((input, value))
}

fn parse_face(input: &str) -> IResult<&str, Vec<usize>> {
    let (input, _) = tag("f")(input)?;
    let (input, indices) = many1(face_index)(input)?;
    let (input, _) = space0(input)?;
    let (input, _) = eof(input)?;
    Ok((input, indices))
}

/// `12`, `12/4`, `12//7` or `12/4/7`; only the position index is kept
fn face_index(input: &str) -> IResult<&str, usize> {
    let (input, _) = space1(input)?;
    let (input, index) = map_res(digit1, str::parse::<usize>)(input)?;
    let (input, _) = opt(preceded(char('/'), take_till(|c: char| c.is_whitespace())))(input)?;
    Ok((input, index))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CUBE_OBJ: &str = "\
# unit square with a tail
o square
v 0.0 0.0 0.0
v 1.0 0.0 0.0
v 1.0 1.0 0.0
v 0 1 -2.5e-1
vt 0.5 0.5
vn 0 0 1

f 1 2 3 4
f 1/1/1 2/1/1 3//1
";

    #[test]
    fn test_parse_vertices_and_faces() {
        let mesh = parse_obj(CUBE_OBJ).unwrap();
        assert_eq!(mesh.vertices().len(), 4);
        assert_eq!(mesh.vertices()[3], point(0.0, 1.0, -0.25));
        assert!(mesh.vertices().iter().all(|v| v.w == 1.0));

        assert_eq!(mesh.faces().len(), 2);
        assert_eq!(mesh.faces()[0].indices, vec![0, 1, 2, 3]);
        assert_eq!(mesh.faces()[1].indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_malformed_vertex_reports_line() {
        let err = parse_obj("v 1 2 3\nv 1.0 abc 3\n").unwrap_err();
        match err {
            ObjError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_zero_index_rejected() {
        let err = parse_obj("v 0 0 0\nv 1 0 0\nf 0 1\n").unwrap_err();
        assert!(matches!(err, ObjError::Parse { line: 3, .. }));
    }

    #[test]
    fn test_index_out_of_range() {
        let err = parse_obj("v 0 0 0\nv 1 0 0\nf 1 2 3\n").unwrap_err();
        assert!(matches!(err, ObjError::Mesh(_)));
    }

    #[test]
    fn test_missing_file() {
        let err = load_obj("/definitely/not/here.obj").unwrap_err();
        assert!(matches!(err, ObjError::Io { .. }));
    }

    #[test]
    fn test_windows_line_endings() {
        let mesh = parse_obj("v 0 0 0\r\nv 1 0 0\r\nv 0 1 0\r\nf 1 2 3\r\n").unwrap();
        assert_eq!(mesh.faces()[0].indices, vec![0, 1, 2]);
    }
}
