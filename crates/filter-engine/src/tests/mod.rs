mod scan_matrix;
